//! Card Entity
//!
//! A punch card with a fixed number of slots and the punches recorded on it.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::punch::Punch;

/// A card as returned by `GET /cards`
///
/// `punches` keeps server order. `punches.len() <= capacity` is expected but
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    pub title: String,
    /// Total number of slots
    pub capacity: i32,
    pub punches: Vec<Punch>,
}

impl Card {
    pub fn punched_count(&self) -> usize {
        self.punches.len()
    }

    /// Unpunched slots left, never negative
    pub fn remaining(&self) -> usize {
        (self.capacity.max(0) as usize).saturating_sub(self.punches.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
}

impl Entity for Card {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Request body for `POST /card`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCard {
    pub title: String,
    pub capacity: i32,
}

impl AddCard {
    pub const MIN_CAPACITY: i32 = 1;
    pub const MAX_CAPACITY: i32 = 50;

    /// Build a request with the capacity clamped to the allowed range
    pub fn new(title: impl Into<String>, capacity: i32) -> Self {
        Self {
            title: title.into(),
            capacity: capacity.clamp(Self::MIN_CAPACITY, Self::MAX_CAPACITY),
        }
    }
}

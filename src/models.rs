//! Frontend Models
//!
//! Data structures matching backend entities, plus slot layout helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Person data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Punch data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punch {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub puncher: Person,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i32,
    pub title: String,
    pub capacity: i32,
    pub punches: Vec<Punch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

/// Result of switching servers: the saved config plus both fresh collections
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerRefresh {
    pub config: ServerConfig,
    pub cards: Vec<Card>,
    pub people: Vec<Person>,
}

/// One position on a card
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Punched(Punch),
    Empty,
}

impl Slot {
    pub fn is_punched(&self) -> bool {
        matches!(self, Slot::Punched(_))
    }
}

/// Capacity form bounds
pub const MIN_CAPACITY: i32 = 1;
pub const MAX_CAPACITY: i32 = 50;
pub const DEFAULT_CAPACITY: i32 = 10;

impl Card {
    /// Number of slots drawn; a non-positive capacity draws none
    pub fn slot_count(&self) -> usize {
        self.capacity.max(0) as usize
    }

    /// Slot `index` is punched iff it is below the number of punches
    pub fn has_punch(&self, index: usize) -> bool {
        index < self.punches.len()
    }

    pub fn slots(&self) -> Vec<Slot> {
        (0..self.slot_count())
            .map(|i| {
                if self.has_punch(i) {
                    Slot::Punched(self.punches[i].clone())
                } else {
                    Slot::Empty
                }
            })
            .collect()
    }

    /// Slots laid out row-major in `cols` columns; only the last row may be short
    pub fn slot_rows(&self, cols: usize) -> Vec<Vec<(usize, Slot)>> {
        let cols = cols.max(1);
        let slots = self.slots();
        (0..row_count(self.capacity, cols))
            .map(|row| {
                (0..cols)
                    .map(|col| row * cols + col)
                    .filter(|&index| index < slots.len())
                    .map(|index| (index, slots[index].clone()))
                    .collect()
            })
            .collect()
    }
}

/// `ceil(capacity / cols)`
pub fn row_count(capacity: i32, cols: usize) -> usize {
    let cols = cols.max(1);
    (capacity.max(0) as usize + cols - 1) / cols
}

/// Keep the selection only while the card still exists
pub fn retain_selection(selected: Option<i32>, cards: &[Card]) -> Option<i32> {
    selected.filter(|id| cards.iter().any(|c| c.id == *id))
}

pub fn clamp_capacity(capacity: i32) -> i32 {
    capacity.clamp(MIN_CAPACITY, MAX_CAPACITY)
}

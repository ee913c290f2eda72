//! Person Entity
//!
//! A registered individual who may punch cards.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A person as returned by `GET /persons`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier
    pub id: i32,
    /// Display name
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl Entity for Person {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Request body for `POST /person`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPerson {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl AddPerson {
    /// Build from raw form input, treating blank optional fields as absent
    pub fn from_form(name: &str, email: &str, phone_number: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: non_blank(email),
            phone_number: non_blank(phone_number),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

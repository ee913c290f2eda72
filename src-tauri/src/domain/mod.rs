//! Domain Layer
//!
//! Data transfer records mirroring the punchcards server schema.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
mod card;
mod punch;
mod person;

pub use entity::find_by_id;
pub use card::{AddCard, Card};
pub use punch::{AddPunch, Punch};
pub use person::{AddPerson, Person};

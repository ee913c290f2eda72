//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the punchcard store.

mod card_cmd;
mod person_cmd;
mod punch_cmd;
mod config_cmd;

pub use card_cmd::*;
pub use person_cmd::*;
pub use punch_cmd::*;
pub use config_cmd::*;

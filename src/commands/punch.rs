//! Punch Commands

use serde::Serialize;
use crate::models::Card;
use super::call;

#[derive(Serialize)]
struct CreatePunchArgs<'a> {
    #[serde(rename = "cardId")]
    card_id: i32,
    #[serde(rename = "puncherId")]
    puncher_id: i32,
    reason: &'a str,
}

/// Punch a card now; returns the refetched card list
pub async fn create_punch(card_id: i32, puncher_id: i32, reason: &str) -> Result<Vec<Card>, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreatePunchArgs { card_id, puncher_id, reason })
        .map_err(|e| e.to_string())?;
    call("create_punch", js_args).await
}

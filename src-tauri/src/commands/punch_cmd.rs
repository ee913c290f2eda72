//! Tauri Commands for Punches

use tauri::State;
use crate::domain::{AddPunch, Card};
use crate::AppState;

/// Trimmed reason; a blank reason is rejected
pub fn reason_from_args(reason: &str) -> Result<String, String> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err("Reason is required".to_string());
    }
    Ok(reason.to_string())
}

/// Punch a card as `puncher_id` at the current time, then refetch cards
#[tauri::command]
pub async fn create_punch(
    state: State<'_, AppState>,
    card_id: i32,
    puncher_id: i32,
    reason: String,
) -> Result<Vec<Card>, String> {
    let reason = reason_from_args(&reason)?;
    // Capacity and puncher are the server's call; just note them
    if let Some(card) = state.store.card(card_id).await {
        if card.is_full() {
            log::warn!("Punching {:?} with no unpunched slots left", card.title);
        }
    }
    if state.store.person(puncher_id).await.is_none() {
        log::warn!("Puncher {} is not in the local people list", puncher_id);
    }
    Ok(state.store.add_punch(AddPunch::now(card_id, puncher_id, reason)).await)
}

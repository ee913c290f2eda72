//! Tauri Commands for Cards
//!
//! Each write returns the refetched card list.

use tauri::State;
use crate::domain::{AddCard, Card};
use crate::AppState;

/// Build a create request from raw input; the title must not be blank
pub fn card_from_args(title: &str, capacity: i32) -> Result<AddCard, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Card title is required".to_string());
    }
    Ok(AddCard::new(title, capacity))
}

/// Fetch all cards from the server
#[tauri::command]
pub async fn list_cards(state: State<'_, AppState>) -> Result<Vec<Card>, String> {
    Ok(state.store.fetch_cards().await)
}

/// Create a card, then refetch
#[tauri::command]
pub async fn create_card(
    state: State<'_, AppState>,
    title: String,
    capacity: i32,
) -> Result<Vec<Card>, String> {
    let add = card_from_args(&title, capacity)?;
    Ok(state.store.add_card(add).await)
}

/// Delete a card, then refetch
#[tauri::command]
pub async fn delete_card(state: State<'_, AppState>, id: i32) -> Result<Vec<Card>, String> {
    Ok(state.store.delete_card(id).await)
}

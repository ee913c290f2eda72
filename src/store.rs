//! Global Application State Store
//!
//! Mirrors the backend snapshot. Collections are only ever replaced wholesale
//! with what a command returned; nothing is merged locally.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{retain_selection, Card, Person};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All cards, in server order
    pub cards: Vec<Card>,
    /// All people who can punch
    pub people: Vec<Person>,
    /// Card shown in the detail view
    pub selected_card: Option<i32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the card list, dropping the selection if its card is gone
pub fn store_set_cards(store: &AppStore, cards: Vec<Card>) {
    let selected = retain_selection(store.selected_card().get_untracked(), &cards);
    *store.cards().write() = cards;
    if selected != store.selected_card().get_untracked() {
        *store.selected_card().write() = selected;
    }
}

pub fn store_set_people(store: &AppStore, people: Vec<Person>) {
    *store.people().write() = people;
}

pub fn store_select_card(store: &AppStore, id: Option<i32>) {
    *store.selected_card().write() = id;
}

/// The selected card, looked up in the current list
pub fn selected_card(store: &AppStore) -> Option<Card> {
    let id = store.selected_card().get()?;
    store.cards().get().into_iter().find(|c| c.id == id)
}

pub fn find_card(store: &AppStore, id: i32) -> Option<Card> {
    store.cards().get().into_iter().find(|c| c.id == id)
}

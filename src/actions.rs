//! Store Actions
//!
//! Each action awaits one backend command and replaces the mirrored
//! collection with the snapshot it returns. Failures go to the console.

use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_set_cards, store_set_people, AppStore};

fn log_error(action: &str, error: &str) {
    web_sys::console::error_1(&format!("[{}] {}", action, error).into());
}

pub fn load_cards(store: AppStore) {
    spawn_local(async move {
        match commands::list_cards().await {
            Ok(cards) => store_set_cards(&store, cards),
            Err(e) => log_error("fetch cards", &e),
        }
    });
}

pub fn load_people(store: AppStore) {
    spawn_local(async move {
        match commands::list_people().await {
            Ok(people) => store_set_people(&store, people),
            Err(e) => log_error("fetch people", &e),
        }
    });
}

pub fn add_card(store: AppStore, title: String, capacity: i32) {
    spawn_local(async move {
        match commands::create_card(&title, capacity).await {
            Ok(cards) => store_set_cards(&store, cards),
            Err(e) => log_error("add card", &e),
        }
    });
}

pub fn add_person(store: AppStore, name: String, email: String, phone_number: String) {
    spawn_local(async move {
        match commands::create_person(&name, &email, &phone_number).await {
            Ok(people) => store_set_people(&store, people),
            Err(e) => log_error("add person", &e),
        }
    });
}

pub fn add_punch(store: AppStore, card_id: i32, puncher_id: i32, reason: String) {
    spawn_local(async move {
        match commands::create_punch(card_id, puncher_id, &reason).await {
            Ok(cards) => store_set_cards(&store, cards),
            Err(e) => log_error("add punch", &e),
        }
    });
}

pub fn delete_card(store: AppStore, id: i32) {
    spawn_local(async move {
        match commands::delete_card(id).await {
            Ok(cards) => store_set_cards(&store, cards),
            Err(e) => log_error("delete card", &e),
        }
    });
}

/// Load both collections on startup
pub fn reload_all(store: AppStore) {
    load_cards(store);
    load_people(store);
}

//! Delete Confirm Dialog Component
//!
//! Asks before deleting a card.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::format;
use crate::store::{find_card, use_app_store};

/// Confirmation for deleting card `card_id`
///
/// Cancel just closes. Delete removes the card and closes.
#[component]
pub fn DeleteConfirmDialog(card_id: i32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let prompt = move || {
        let title = find_card(&store, card_id).map(|c| c.title).unwrap_or_default();
        format::delete_prompt(&title)
    };

    view! {
        <div class="delete-confirm">
            <p class="delete-confirm-text">{prompt}</p>
            <div class="sheet-actions">
                <button class="cancel-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                <button
                    class="confirm-btn destructive"
                    on:click=move |_| {
                        actions::delete_card(store, card_id);
                        ctx.close();
                    }
                >
                    "🗑 Delete"
                </button>
            </div>
        </div>
    }
}

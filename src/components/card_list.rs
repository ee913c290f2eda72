//! Card List Component
//!
//! All cards with selection, delete and an add button.

use leptos::prelude::*;

use crate::components::CardSummary;
use crate::context::{use_app_context, Sheet};
use crate::store::{store_select_card, use_app_store, AppStateStoreFields};

#[component]
pub fn CardList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="card-list">
            <div class="card-list-header">
                <h1>"Cards"</h1>
                <button class="add-btn" title="New card" on:click=move |_| ctx.open(Sheet::AddCard)>
                    "+"
                </button>
            </div>

            <Show when=move || store.cards().get().is_empty()>
                <p class="empty-hint">"No existing cards"</p>
            </Show>

            <For
                each=move || store.cards().get()
                // Punch count in the key so a new punch re-renders the row
                key=|card| (card.id, card.title.clone(), card.capacity, card.punches.len())
                children=move |card| {
                    let id = card.id;
                    let is_selected = move || store.selected_card().get() == Some(id);
                    let row_class = move || {
                        if is_selected() { "card-row selected" } else { "card-row" }
                    };

                    view! {
                        <div class=row_class on:click=move |_| store_select_card(&store, Some(id))>
                            <CardSummary card=card />
                            <button
                                class="delete-btn"
                                title="Delete"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.open(Sheet::ConfirmDelete(id));
                                }
                            >
                                "🗑"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

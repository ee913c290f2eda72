//! Punchcards Frontend App
//!
//! Desktop layout: card list on the left, the selected card on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{CardDetails, CardList, SheetHost};
use crate::context::{AppContext, Sheet};
use crate::store::{selected_card, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Load cards and people on mount
    Effect::new(move |_| {
        actions::reload_all(store);
    });

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <CardList />
                <button class="settings-btn" on:click=move |_| ctx.open(Sheet::Settings)>
                    "⚙ Settings"
                </button>
            </aside>

            <main class="main-content">
                {move || match selected_card(&store) {
                    Some(card) => view! { <CardDetails card=card /> }.into_any(),
                    None => view! { <p class="empty-hint">"Pick a card"</p> }.into_any(),
                }}
            </main>

            <SheetHost />
        </div>
    }
}

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{CardDetails, CardList, SettingsPanel, SheetHost};
use crate::context::AppContext;
use crate::store::{selected_card, store_select_card, AppState};

/// Mobile view selection
#[derive(Clone, Copy, PartialEq)]
enum MobileView {
    Cards,
    Settings,
}

/// Stacked navigation: the list, and the selected card pushed on top
#[component]
pub fn MobileApp() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    let (current_view, set_current_view) = signal(MobileView::Cards);

    // Initial load
    Effect::new(move |_| {
        actions::reload_all(store);
    });

    let cards_view = move || match selected_card(&store) {
        Some(card) => view! {
            <div class="mobile-detail">
                <button class="back-btn" on:click=move |_| store_select_card(&store, None)>
                    "‹ Cards"
                </button>
                <CardDetails card=card />
            </div>
        }
        .into_any(),
        None => view! { <CardList /> }.into_any(),
    };

    view! {
        <div class="mobile-app-container">
            <div class="mobile-content">
                {move || match current_view.get() {
                    MobileView::Cards => cards_view(),
                    MobileView::Settings => view! {
                        <SettingsPanel on_back=move |_| set_current_view.set(MobileView::Cards) />
                    }.into_any(),
                }}
            </div>

            <nav class="mobile-bottom-nav">
                <button
                    class=move || if current_view.get() == MobileView::Cards { "mobile-nav-item active" } else { "mobile-nav-item" }
                    on:click=move |_| set_current_view.set(MobileView::Cards)
                >
                    <div class="mobile-nav-icon">"▦"</div>
                    <div class="mobile-nav-label">"Cards"</div>
                </button>
                <button
                    class=move || if current_view.get() == MobileView::Settings { "mobile-nav-item active" } else { "mobile-nav-item" }
                    on:click=move |_| set_current_view.set(MobileView::Settings)
                >
                    <div class="mobile-nav-icon">"⚙"</div>
                    <div class="mobile-nav-label">"Settings"</div>
                </button>
            </nav>

            <SheetHost />
        </div>
    }
}

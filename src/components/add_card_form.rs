//! Add Card Form Component
//!
//! Title plus a capacity stepper bounded to 1..=50.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::models::{clamp_capacity, DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
use crate::store::use_app_store;

#[component]
pub fn AddCardForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (capacity, set_capacity) = signal(DEFAULT_CAPACITY);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() { return; }
        actions::add_card(store, text, capacity.get());
        ctx.close();
    };

    view! {
        <form class="sheet-form" on:submit=save>
            <div class="sheet-toolbar">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                <h2>"Create New Card"</h2>
                <button
                    type="submit"
                    class="save-btn"
                    disabled=move || title.get().trim().is_empty()
                >
                    "Save"
                </button>
            </div>

            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <div class="stepper">
                <span>{move || format!("Capacity: {}", capacity.get())}</span>
                <button
                    type="button"
                    disabled=move || capacity.get() <= MIN_CAPACITY
                    on:click=move |_| set_capacity.update(|c| *c = clamp_capacity(*c - 1))
                >
                    "−"
                </button>
                <button
                    type="button"
                    disabled=move || capacity.get() >= MAX_CAPACITY
                    on:click=move |_| set_capacity.update(|c| *c = clamp_capacity(*c + 1))
                >
                    "+"
                </button>
            </div>
        </form>
    }
}

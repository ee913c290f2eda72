//! Add Person Form Component

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::use_app_store;

/// Name is required; blank email and phone are sent as null
#[component]
pub fn AddPersonForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone_number, set_phone_number) = signal(String::new());

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let person_name = name.get().trim().to_string();
        if person_name.is_empty() { return; }
        actions::add_person(store, person_name, email.get(), phone_number.get());
        ctx.close();
    };

    view! {
        <form class="sheet-form" on:submit=create>
            <input
                type="text"
                placeholder="Name"
                autocapitalize="words"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                autocapitalize="off"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone number"
                prop:value=move || phone_number.get()
                on:input=move |ev| set_phone_number.set(event_target_value(&ev))
            />
            <div class="sheet-actions">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                <button
                    type="submit"
                    class="save-btn"
                    disabled=move || name.get().trim().is_empty()
                >
                    "Create person"
                </button>
            </div>
        </form>
    }
}

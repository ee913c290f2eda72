//! Add Punch Form Component
//!
//! Pick a puncher (or add one), give a reason, punch the card. Input is kept
//! in the context's punch draft so it survives the add-person sheet.

use leptos::prelude::*;

use crate::actions;
use crate::context::{use_app_context, Sheet};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddPunchForm(card_id: i32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load people on mount
    Effect::new(move |_| {
        actions::load_people(store);
    });

    let reason = move || ctx.punch_draft().reason;

    // Explicit pick if it still exists, otherwise the first person
    let puncher_id = move || {
        let people = store.people().get();
        ctx.punch_draft()
            .puncher_id
            .filter(|id| people.iter().any(|p| p.id == *id))
            .or_else(|| people.first().map(|p| p.id))
    };

    let punch = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = reason().trim().to_string();
        let Some(puncher) = puncher_id() else { return; };
        if text.is_empty() { return; }
        actions::add_punch(store, card_id, puncher, text);
        ctx.close();
    };

    view! {
        <form class="sheet-form" on:submit=punch>
            <section>
                <h3>"Puncher"</h3>
                <Show
                    when=move || !store.people().get().is_empty()
                    fallback=|| view! { <p class="empty-hint">"Add a person to punch this card"</p> }
                >
                    <select on:change=move |ev| {
                        let picked = event_target_value(&ev).parse().ok();
                        ctx.edit_punch_draft(|d| d.puncher_id = picked);
                    }>
                        <For
                            each=move || store.people().get()
                            key=|person| (person.id, person.name.clone())
                            children=move |person| {
                                let id = person.id;
                                view! {
                                    <option value=id.to_string() selected=move || puncher_id() == Some(id)>
                                        {person.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </Show>
                <button type="button" class="add-person-btn" on:click=move |_| ctx.open(Sheet::AddPerson)>
                    "+ Add person"
                </button>
            </section>

            <section>
                <h3>"Reason"</h3>
                <input
                    type="text"
                    placeholder="Ex: Bad behavior"
                    prop:value=reason
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.edit_punch_draft(|d| d.reason = text);
                    }
                />
            </section>

            <div class="sheet-actions">
                <button type="button" class="cancel-btn" on:click=move |_| ctx.close()>"Cancel"</button>
                <button
                    type="submit"
                    class="punch-btn destructive"
                    disabled=move || reason().trim().is_empty() || puncher_id().is_none()
                >
                    "Punch card"
                </button>
            </div>
        </form>
    }
}

//! Sheet Host Component
//!
//! Renders the topmost open sheet over the current screen.

use leptos::prelude::*;

use crate::components::{AddCardForm, AddPersonForm, AddPunchForm, DeleteConfirmDialog, SettingsPanel};
use crate::context::{use_app_context, Sheet};

#[component]
pub fn SheetHost() -> impl IntoView {
    let ctx = use_app_context();
    // Only a change of the top sheet remounts; draft edits do not
    let current = Memo::new(move |_| ctx.current());

    view! {
        {move || current.get().map(|sheet| {
            let body = match sheet {
                Sheet::AddCard => view! { <AddCardForm /> }.into_any(),
                Sheet::AddPerson => view! { <AddPersonForm /> }.into_any(),
                Sheet::AddPunch(card_id) => view! { <AddPunchForm card_id=card_id /> }.into_any(),
                Sheet::ConfirmDelete(card_id) => view! { <DeleteConfirmDialog card_id=card_id /> }.into_any(),
                Sheet::Settings => view! { <SettingsPanel on_back=move |_| ctx.close() /> }.into_any(),
            };
            view! {
                <div class="sheet-backdrop" on:click=move |_| ctx.close()>
                    <div class="sheet" on:click=|ev| ev.stop_propagation()>
                        {body}
                    </div>
                </div>
            }
        })}
    }
}

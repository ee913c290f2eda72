//! Settings Panel Component
//!
//! Server URL editor and the tail of the app log.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_set_cards, store_set_people, use_app_store};

const LOG_LINES: usize = 50;

#[component]
pub fn SettingsPanel(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let (base_url, set_base_url) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (logs, set_logs) = signal(Vec::<String>::new());

    let load_logs = move || {
        spawn_local(async move {
            if let Ok(lines) = commands::get_recent_logs(LOG_LINES).await {
                set_logs.set(lines);
            }
        });
    };

    // Load current config and logs on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_server_config().await {
                Ok(config) => set_base_url.set(config.base_url),
                Err(e) => web_sys::console::error_1(&format!("[settings] {}", e).into()),
            }
        });
        load_logs();
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = base_url.get();
        spawn_local(async move {
            match commands::save_server_config(url).await {
                Ok(refresh) => {
                    set_base_url.set(refresh.config.base_url);
                    set_status.set(Some("Saved".to_string()));
                    store_set_cards(&store, refresh.cards);
                    store_set_people(&store, refresh.people);
                }
                Err(e) => set_status.set(Some(e)),
            }
            load_logs();
        });
    };

    view! {
        <div class="settings-panel">
            <div class="sheet-toolbar">
                <button type="button" class="cancel-btn" on:click=move |_| on_back.run(())>"Back"</button>
                <h2>"Settings"</h2>
            </div>

            <form class="sheet-form" on:submit=save>
                <h3>"Server"</h3>
                <input
                    type="url"
                    placeholder="https://punchcards-server.shuttleapp.rs"
                    prop:value=move || base_url.get()
                    on:input=move |ev| set_base_url.set(event_target_value(&ev))
                />
                <button type="submit" class="save-btn" disabled=move || base_url.get().trim().is_empty()>
                    "Save"
                </button>
                {move || status.get().map(|s| view! { <p class="settings-status">{s}</p> })}
            </form>

            <section class="log-viewer">
                <div class="log-header">
                    <h3>"Recent log"</h3>
                    <button type="button" on:click=move |_| load_logs()>"Refresh"</button>
                </div>
                <pre>{move || logs.get().join("\n")}</pre>
            </section>
        </div>
    }
}

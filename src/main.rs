//! Punchcards Frontend Entry Point

mod models;
mod format;
mod commands;
mod context;
mod store;
mod actions;
mod components;
mod app;
mod mobile;

use app::App;
use leptos::prelude::*;
use mobile::MobileApp;

fn is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| ["Android", "iPhone", "iPad"].iter().any(|m| ua.contains(m)))
        .unwrap_or(false)
}

fn main() {
    console_error_panic_hook::set_once();
    if is_mobile() {
        mount_to_body(MobileApp);
    } else {
        mount_to_body(App);
    }
}

//! Punchcards Backend
//!
//! Layered architecture:
//! - domain: Records mirroring the server schema
//! - api: HTTP transport to the punchcards server
//! - store: In-memory snapshot, refetched after every write
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;

mod domain;
mod api;
mod config;
mod store;
mod commands;

use api::HttpApi;
use store::PunchcardStore;

/// Application state shared across commands
pub struct AppState {
    pub store: PunchcardStore<HttpApi>,
    pub config_dir: PathBuf,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Punchcards")?;

            let config_dir = app_handle.path().app_config_dir()?;
            let saved = config::load_config(&config_dir).unwrap_or_else(|e| {
                log::error!("Failed to load server config, using default: {}", e);
                config::ServerConfig::default()
            });
            let server = config::resolve(saved, std::env::var(config::SERVER_URL_ENV).ok());
            let _ = rolling_logger::info(&format!("Using server {}", server.base_url));

            app.manage(AppState {
                store: PunchcardStore::new(Arc::new(HttpApi::new(server.base_url))),
                config_dir,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Cards
            commands::list_cards,
            commands::create_card,
            commands::delete_card,
            // People
            commands::list_people,
            commands::create_person,
            // Punches
            commands::create_punch,
            // Settings
            commands::get_server_config,
            commands::save_server_config,
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

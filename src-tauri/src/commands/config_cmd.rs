//! Settings Commands
//!
//! Server URL and recent log lines for the settings screen.

use serde::Serialize;
use tauri::State;
use crate::config::{self, ServerConfig};
use crate::domain::{Card, Person};
use crate::AppState;

const DEFAULT_LOG_LINES: usize = 100;

/// Server config currently in use
#[tauri::command]
pub fn get_server_config(state: State<'_, AppState>) -> ServerConfig {
    ServerConfig {
        base_url: state.store.api().base_url(),
    }
}

/// The applied config with both collections fetched from the new server
#[derive(Debug, Clone, Serialize)]
pub struct ServerRefresh {
    pub config: ServerConfig,
    pub cards: Vec<Card>,
    pub people: Vec<Person>,
}

/// Validate, persist and apply a new server URL, then reload everything
#[tauri::command]
pub async fn save_server_config(
    state: State<'_, AppState>,
    base_url: String,
) -> Result<ServerRefresh, String> {
    let new_config = ServerConfig::new(&base_url).map_err(|e| e.to_string())?;
    config::save_config(&state.config_dir, &new_config).map_err(|e| e.to_string())?;

    state.store.api().set_base_url(&new_config.base_url);
    log::info!("Server URL set to {}", new_config.base_url);
    let (cards, people) = state.store.refresh_all().await;

    Ok(ServerRefresh {
        config: new_config,
        cards,
        people,
    })
}

/// Most recent log lines, oldest first
#[tauri::command]
pub fn get_recent_logs(limit: Option<usize>) -> Vec<String> {
    rolling_logger::recent_lines(limit.unwrap_or(DEFAULT_LOG_LINES))
}

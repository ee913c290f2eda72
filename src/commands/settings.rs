//! Settings Command Wrappers
//!
//! Server URL and log access for the settings screen.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{ServerConfig, ServerRefresh};
use super::call;

/// Get the server config in use
pub async fn get_server_config() -> Result<ServerConfig, String> {
    call("get_server_config", JsValue::NULL).await
}

/// Save and apply a new server URL; returns the collections fetched from it
pub async fn save_server_config(base_url: String) -> Result<ServerRefresh, String> {
    #[derive(Serialize)]
    struct Args {
        #[serde(rename = "baseUrl")]
        base_url: String,
    }

    let args = serde_wasm_bindgen::to_value(&Args { base_url })
        .map_err(|e| format!("Serialization error: {}", e))?;
    call("save_server_config", args).await
}

pub async fn get_recent_logs(limit: usize) -> Result<Vec<String>, String> {
    #[derive(Serialize)]
    struct Args {
        limit: usize,
    }

    let args = serde_wasm_bindgen::to_value(&Args { limit })
        .map_err(|e| format!("Serialization error: {}", e))?;
    call("get_recent_logs", args).await
}

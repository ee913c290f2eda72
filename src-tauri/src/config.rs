//! Server Configuration
//!
//! Base URL of the punchcards server, persisted as JSON in the app config dir.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://punchcards-server.shuttleapp.rs";

/// Overrides the saved base URL at startup
pub const SERVER_URL_ENV: &str = "PUNCHCARDS_SERVER_URL";

const CONFIG_FILE: &str = "server_config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode config for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid server URL {0:?}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Accepts absolute http(s) URLs only
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }
}

pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Load the saved config; a missing file yields the default
pub fn load_config(config_dir: &Path) -> Result<ServerConfig, ConfigError> {
    let path = config_path(config_dir);
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config: ServerConfig =
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
    ServerConfig::new(&config.base_url)
}

pub fn save_config(config_dir: &Path, config: &ServerConfig) -> Result<(), ConfigError> {
    std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Io {
        path: config_dir.to_path_buf(),
        source,
    })?;
    let path = config_path(config_dir);
    let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Encode {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, json).map_err(|source| ConfigError::Io { path, source })
}

/// Saved config, replaced by `override_url` when that is a valid URL
pub fn resolve(saved: ServerConfig, override_url: Option<String>) -> ServerConfig {
    match override_url {
        Some(url) => match ServerConfig::new(&url) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring {}: {}", SERVER_URL_ENV, e);
                saved
            }
        },
        None => saved,
    }
}

//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON file holding account records
    pub accounts_path: PathBuf,
    /// Path of the bundled monster catalog
    pub monster_data_path: PathBuf,
    /// Base URL of a dnd5eapi-compatible service; when set, the catalog is
    /// fetched from it instead of the bundled file
    pub monster_api_url: Option<String>,
    /// Seconds between account autosave flushes
    pub autosave_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            accounts_path: env::var("ACCOUNTS_PATH")
                .unwrap_or_else(|_| "data/accounts.json".to_string())
                .into(),
            monster_data_path: env::var("MONSTER_DATA_PATH")
                .unwrap_or_else(|_| "data/monsters.json".to_string())
                .into(),
            monster_api_url: env::var("MONSTER_API_URL").ok(),
            autosave_interval_secs: env::var("AUTOSAVE_INTERVAL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("AUTOSAVE_INTERVAL_SECS must be a number of seconds")?,
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::common::error::AppError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Idle time in milliseconds after which returning to the foreground locks the app.
    #[serde(default = "default_lock_threshold_ms")]
    pub lock_threshold_ms: i64,

    /// Name of the key-value storage instance holding the inactivity timestamp.
    #[serde(default = "default_storage_id")]
    pub storage_id: String,

    #[serde(default = "default_start_time_key")]
    pub start_time_key: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_lock_threshold_ms() -> i64 {
    3000
}

fn default_storage_id() -> String {
    "inactivity-storage".to_string()
}

fn default_start_time_key() -> String {
    "startTime".to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wallet_core")
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lock_threshold_ms: default_lock_threshold_ms(),
            storage_id: default_storage_id(),
            start_time_key: default_start_time_key(),
            data_dir: default_data_dir(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads the config file if one is given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                let config = Self::from_toml_str(&contents)?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Directory of the named storage instance.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_id)
    }
}

//! Configuration management for the Wellbeing Tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: WT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Snapshot storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot and export files
    pub data_dir: String,
    /// Snapshot file name inside `data_dir`
    pub snapshot_file: String,
}

/// Seed values used when the store is opened empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Name given to the profile created on first run
    pub profile_name: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            profile_name: "Default".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: "data".to_string(),
                snapshot_file: "wellbeing.json".to_string(),
            },
            defaults: DefaultsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with WT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (WT__ prefix)
            // e.g., WT__STORAGE__DATA_DIR=/var/lib/wellbeing sets storage.data_dir
            .add_source(config::Environment::with_prefix("WT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Full path of the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(&self.storage.snapshot_file)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

//! Configuration management for the Rentora engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Storage backend selection
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Data directory for the file backend.
    pub path: String,
    /// Prefix applied to every collection key (the original dashboard used
    /// a vendor prefix on its browser-storage keys).
    pub namespace: String,
}

/// Business-rule toggles for behaviors the original left implicit
#[derive(Debug, Deserialize, Clone)]
pub struct RulesConfig {
    /// Reject rental status changes outside the lifecycle table. Off
    /// restores the original's permissive merges.
    pub enforce_transitions: bool,
    /// Removing equipment also removes rentals and maintenance records
    /// referencing it. Off (the default) orphans them, as the original did.
    pub cascade_delete: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (RENTORA_STORAGE__BACKEND etc.;
            // the double underscore keeps snake_case field names intact)
            .add_source(
                Environment::with_prefix("RENTORA")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the data directory from RENTORA_DATA_DIR if present
            .set_override_option("storage.path", env::var("RENTORA_DATA_DIR").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            rules: RulesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            path: "data".to_string(),
            namespace: String::new(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enforce_transitions: true,
            cascade_delete: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

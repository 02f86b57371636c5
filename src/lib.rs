//! Rentora Equipment Rental Management Engine
//!
//! The rental lifecycle and consistency engine behind an equipment rental
//! dashboard: equipment inventory, rental bookings, and maintenance
//! scheduling kept mutually consistent over a key-value persistence
//! contract. The UI, routing, and presentation live elsewhere; this crate
//! is the synchronous core their event handlers call into.

use std::sync::Arc;

pub mod config;
pub mod dates;
pub mod error;
pub mod identity;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use config::StorageBackend;
use repository::Repository;
use services::Services;
use storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// Application state shared across all UI event handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the engine from configuration, selecting the storage backend
    /// and wiring repositories and services together.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => Arc::new(JsonFileStore::open(&config.storage.path)?),
        };
        Ok(Self::with_store(config, store))
    }

    /// Build the engine over an externally provided store.
    pub fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let repository = Repository::new(store, config.storage.namespace.clone());
        let services = Services::new(repository, config.rules.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Initialize tracing from the logging configuration. Call once from the
/// embedding application.
pub fn init_tracing(logging: &config::LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("rentora_engine={}", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

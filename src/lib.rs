//! Inventario Telecom
//!
//! Local record store for a telecom installation company's inventory:
//! materials, tools, locations, technicians, suppliers, projects, stock
//! movements and assignments, kept as JSON tables in a pluggable key-value
//! storage backend.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared by all commands
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Open the configured storage backend and build the services over it
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let storage = storage::open(&config.storage)?;
        let repository = repository::Repository::new(storage);
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        })
    }
}

//! St Pauls eLibrary catalog
//!
//! Book catalog browsing over an in-memory collection: text search and
//! category filtering, book details, a borrowed-books dashboard and admin
//! management, exposed as a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{Repository, SeedData};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Load and validate the configured seed, then build the services over it
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let seed = SeedData::load(config.catalog.seed_path.as_deref())?.validate()?;
        Ok(Self::with_seed(config, seed))
    }

    pub fn with_seed(config: AppConfig, seed: repository::Seed) -> Self {
        let repository = Repository::new(seed, &config.catalog.placeholder_cover);
        let services = Services::new(repository, &config.catalog);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

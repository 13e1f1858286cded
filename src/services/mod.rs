//! Business logic services

pub mod admin;
pub mod catalog;
pub mod dashboard;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub admin: admin::AdminService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, catalog_config: &CatalogConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            admin: admin::AdminService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(
                repository,
                &catalog_config.placeholder_cover,
            ),
        }
    }
}

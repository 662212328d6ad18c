//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::{JwtConfig, Settings};
use crate::db::AsyncDbPool;
use crate::repositories::{Repositories, UserStore};
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since both Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token validation in the auth middleware
    pub jwt_config: JwtConfig,
    /// Application version reported by the health check
    pub version: String,
}

impl AppState {
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool, settings: &Settings) -> Self {
        Self::from_repositories(pool.clone(), Repositories::new(pool), settings)
    }

    /// Like `new`, with a caller-supplied user store.
    pub fn with_user_store(
        pool: AsyncDbPool,
        users: Arc<dyn UserStore>,
        settings: &Settings,
    ) -> Self {
        Self::from_repositories(
            pool.clone(),
            Repositories::with_user_store(pool, users),
            settings,
        )
    }

    fn from_repositories(pool: AsyncDbPool, repos: Repositories, settings: &Settings) -> Self {
        let services = Services::new(repos, settings.jwt.clone(), settings.sso.clone());
        Self {
            services,
            db_pool: pool,
            jwt_config: settings.jwt.clone(),
            version: settings.application.version.clone(),
        }
    }
}

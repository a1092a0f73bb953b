use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{CustomersService, SecurityService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: customers_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Customer records and token issuance.
    pub customers: CustomersService,
    /// Token validation and manager credential checks.
    pub security: SecurityService,
}

impl AppState {
    /// Wire the services onto a shared pool.
    pub fn new(pool: customers_db::DbPool, config: ServerConfig) -> Self {
        let customers = CustomersService::new(pool.clone(), config.password, config.token_ttl());
        let security = SecurityService::new(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            customers,
            security,
        }
    }
}

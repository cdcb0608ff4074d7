use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted, config is behind `Arc`).
/// It is the only handle handlers have on the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: starwars_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

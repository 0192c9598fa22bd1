use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the single store handle; it is created once in `main` and
/// never looked up globally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fyyur_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

use std::sync::Arc;

use crate::cache::CacheBackend;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: formloom_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Optional cache backend. `None` means no cache is configured, which
    /// the health probe reports as its own status rather than an error.
    pub cache: Option<Arc<dyn CacheBackend>>,
}

//! Optional cache backend seam.
//!
//! The service itself never requires a cache; the health probe reports one
//! when present. Absence is modeled as `None` in [`crate::state::AppState`]
//! and reported as `not configured`, never probed at runtime by type.

use async_trait::async_trait;

/// Error from a cache backend liveness check.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface for an optional cache dependency.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Round-trip liveness check.
    async fn ping(&self) -> Result<(), CacheError>;
}

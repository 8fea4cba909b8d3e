//! Health probe handler.
//!
//! Reports overall service health plus the independent status of the
//! persistence backend and the optional cache backend. Each is reported as
//! `connected`, `not configured`, or an error string; the HTTP status is
//! 200 only when everything that is configured is healthy.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Persistence backend status.
    pub database: String,
    /// Cache backend status.
    pub cache: String,
}

/// GET /health -- service, database, and cache health.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match formloom_db::health_check(&state.pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {e}"),
    };

    let cache = match &state.cache {
        None => "not configured".to_string(),
        Some(backend) => match backend.ping().await {
            Ok(()) => "connected".to_string(),
            Err(e) => format!("error: {e}"),
        },
    };

    // "not configured" is healthy; only a reported error degrades the cache.
    let healthy = database == "connected" && !cache.starts_with("error");

    let (status, code) = if healthy {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
            cache,
        }),
    )
}

pub mod health;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /templates                    GET list, POST create
/// /templates/{id}               GET
/// /templates/{id}/documents     GET
/// /templates/{id}/clone         POST
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/templates", templates::router())
}

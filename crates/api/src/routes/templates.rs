//! Route definitions for templates.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// GET    /{id}/documents   -> list_documents
/// POST   /{id}/clone       -> clone
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(templates::list).post(templates::create))
        .route("/{id}", get(templates::get_by_id))
        .route("/{id}/documents", get(templates::list_documents))
        .route("/{id}/clone", post(templates::clone))
}

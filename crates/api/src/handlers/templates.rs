//! Template handlers: CRUD reads plus the clone operation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use formloom_core::error::CoreError;
use formloom_core::types::DbId;
use formloom_db::models::template::{CloneAttachmentsParams, CreateTemplate};
use formloom_db::repositories::{DocumentRepo, TemplateCloneRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /templates
///
/// List all templates, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /templates/{id}
///
/// Get a single template.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;

    Ok(Json(DataResponse { data: template }))
}

/// GET /templates/{id}/documents
///
/// List a template's document attachments in attachment order.
pub async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if TemplateRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }));
    }

    let documents = DocumentRepo::list_by_template(&state.pool, id).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// POST /templates
///
/// Create a template.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let template = TemplateRepo::create(&state.pool, &input).await?;

    tracing::info!(template_id = template.id, "Template created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// POST /templates/{id}/clone
///
/// Clone a template: remap its schema identifiers and duplicate its
/// eligible document attachments onto a new independent template.
pub async fn clone(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(params): Json<CloneAttachmentsParams>,
) -> AppResult<impl IntoResponse> {
    let cloned = TemplateCloneRepo::clone_attachments(&state.pool, id, &params).await?;

    tracing::info!(
        original_id = id,
        template_id = cloned.template.id,
        documents = cloned.documents.len(),
        "Template clone created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: cloned })))
}

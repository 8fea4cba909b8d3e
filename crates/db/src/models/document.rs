//! Document attachment and preview image models.

use formloom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `template_documents` table.
///
/// References a stored binary through `blob_id`; the bytes themselves are
/// never duplicated when a document is cloned.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateDocument {
    pub id: DbId,
    pub template_id: DbId,
    pub uuid: Uuid,
    pub blob_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `document_preview_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PreviewImage {
    pub id: DbId,
    pub document_id: DbId,
    pub blob_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a document to a template.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub template_id: DbId,
    pub uuid: Uuid,
    pub blob_id: DbId,
}

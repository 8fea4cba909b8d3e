//! Template models and DTOs.

use formloom_core::template::TemplateContent;
use formloom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `templates` table.
///
/// `schema` and `fields` are kept as raw jsonb here; use [`Template::content`]
/// to get the typed, mutable view used by the clone engine.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub schema: serde_json::Value,
    pub fields: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Template {
    /// Parse the jsonb columns into the typed content model.
    pub fn content(&self) -> Result<TemplateContent, serde_json::Error> {
        Ok(TemplateContent {
            schema: serde_json::from_value(self.schema.clone())?,
            fields: serde_json::from_value(self.fields.clone())?,
        })
    }
}

/// DTO for creating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    pub schema: Option<serde_json::Value>,
    pub fields: Option<serde_json::Value>,
}

/// Parameters for cloning a template's attachments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloneAttachmentsParams {
    /// Display name for the new template. Defaults to `<original> (Clone)`.
    pub name: Option<String>,
    /// Replacement display names, aligned to schema position. An empty or
    /// absent entry keeps the original name.
    #[serde(default)]
    pub replacement_names: Vec<Option<String>>,
    /// Schema items to leave untouched: not remapped, not cloned.
    #[serde(default)]
    pub excluded_attachment_uuids: Vec<Uuid>,
}

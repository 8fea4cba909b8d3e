//! In-memory template content model.
//!
//! A template row stores two jsonb columns: `schema` (the ordered list of
//! attachment slots) and `fields` (the form fields with their placement
//! areas). These structs are the typed view of that content. Unknown keys
//! are preserved verbatim through a flattened passthrough map so that
//! rewriting identifiers never strips metadata written by other services.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The mutable content of a template: schema items plus fields.
///
/// Both sequences are ordered; order is significant for positional
/// replacement names and for clone output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateContent {
    #[serde(default)]
    pub schema: Vec<SchemaItem>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One entry of a template's schema: a single attachment's role.
///
/// `attachment_uuid` is unique within a template's schema at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaItem {
    pub attachment_uuid: Uuid,
    #[serde(default)]
    pub name: String,
    /// Opaque metadata carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A logical form element. Carries zero or more placement areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A field's visual placement, optionally tied to a schema item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_uuid: Option<Uuid>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateContent {
    /// All schema item identifiers, in schema order.
    pub fn schema_uuids(&self) -> Vec<Uuid> {
        self.schema.iter().map(|item| item.attachment_uuid).collect()
    }
}

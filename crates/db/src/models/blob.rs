//! Stored binary reference models.

use formloom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `blobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blob {
    pub id: DbId,
    pub key: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub byte_size: i64,
    pub checksum: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a stored binary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlob {
    pub key: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub byte_size: i64,
    pub checksum: Option<String>,
}

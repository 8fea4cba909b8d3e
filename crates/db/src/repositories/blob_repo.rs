//! Repository for the `blobs` table.

use formloom_core::types::DbId;
use sqlx::PgPool;

use crate::models::blob::{Blob, CreateBlob};

/// Column list for blobs queries.
const COLUMNS: &str = "id, key, filename, content_type, byte_size, checksum, \
    created_at, updated_at";

/// Provides operations for stored binary references.
pub struct BlobRepo;

impl BlobRepo {
    /// Register a stored binary, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlob) -> Result<Blob, sqlx::Error> {
        let query = format!(
            "INSERT INTO blobs (key, filename, content_type, byte_size, checksum)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blob>(&query)
            .bind(&input.key)
            .bind(&input.filename)
            .bind(input.content_type.as_deref())
            .bind(input.byte_size)
            .bind(input.checksum.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a blob by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blob>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blobs WHERE id = $1");
        sqlx::query_as::<_, Blob>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

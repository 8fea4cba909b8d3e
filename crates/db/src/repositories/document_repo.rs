//! Repository for document attachments and their preview images.

use formloom_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::document::{CreateDocument, PreviewImage, TemplateDocument};

/// Column list for template_documents queries.
pub(crate) const DOCUMENT_COLUMNS: &str =
    "id, template_id, uuid, blob_id, created_at, updated_at";

/// Column list for document_preview_images queries.
pub(crate) const PREVIEW_COLUMNS: &str = "id, document_id, blob_id, created_at, updated_at";

/// Provides operations for document attachments.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Attach a document to a template.
    ///
    /// `touch_template` controls the incidental bookkeeping on the owning
    /// template: when true the template's `updated_at` is bumped, when false
    /// the insert is scoped to the attachment row alone. Clone operations
    /// pass false so cloning never dirties unrelated records.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateDocument,
        touch_template: bool,
    ) -> Result<TemplateDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_documents (template_id, uuid, blob_id)
             VALUES ($1, $2, $3)
             RETURNING {DOCUMENT_COLUMNS}"
        );
        let document = sqlx::query_as::<_, TemplateDocument>(&query)
            .bind(input.template_id)
            .bind(input.uuid)
            .bind(input.blob_id)
            .fetch_one(&mut *conn)
            .await?;

        if touch_template {
            sqlx::query("UPDATE templates SET updated_at = NOW() WHERE id = $1")
                .bind(input.template_id)
                .execute(conn)
                .await?;
        }

        Ok(document)
    }

    /// List a template's documents in attachment order.
    pub async fn list_by_template(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TemplateDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM template_documents
             WHERE template_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, TemplateDocument>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }

    /// Add a preview image under a document, sharing the given blob.
    ///
    /// Scoped like [`DocumentRepo::create`] with `touch_template = false`:
    /// no bookkeeping outside the inserted row.
    pub async fn create_preview(
        conn: &mut PgConnection,
        document_id: DbId,
        blob_id: DbId,
    ) -> Result<PreviewImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_preview_images (document_id, blob_id)
             VALUES ($1, $2)
             RETURNING {PREVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, PreviewImage>(&query)
            .bind(document_id)
            .bind(blob_id)
            .fetch_one(conn)
            .await
    }

    /// List a document's preview images in creation order.
    pub async fn list_previews(
        pool: &PgPool,
        document_id: DbId,
    ) -> Result<Vec<PreviewImage>, sqlx::Error> {
        let query = format!(
            "SELECT {PREVIEW_COLUMNS} FROM document_preview_images
             WHERE document_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, PreviewImage>(&query)
            .bind(document_id)
            .fetch_all(pool)
            .await
    }

    /// Count documents attached to a template.
    pub async fn count_by_template(pool: &PgPool, template_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM template_documents WHERE template_id = $1")
                .bind(template_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}

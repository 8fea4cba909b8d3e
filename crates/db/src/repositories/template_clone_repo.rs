//! Template clone orchestration.
//!
//! Runs the two clone phases inside a single transaction: the schema
//! identifier remap (pure, in `formloom_core::remap`) followed by attachment
//! cloning. Either the whole clone commits or nothing does -- a failed
//! template write or attachment insert rolls back every row created by the
//! call.

use std::collections::HashSet;

use formloom_core::remap::{remap_schema, UuidMap};
use formloom_core::types::DbId;
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::models::document::{CreateDocument, TemplateDocument};
use crate::models::template::{CloneAttachmentsParams, Template};
use crate::repositories::document_repo::{DocumentRepo, PREVIEW_COLUMNS};
use crate::repositories::template_repo::{self, TemplateRepo};

/// Errors surfaced by a clone operation.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("Template not found: {0}")]
    TemplateNotFound(DbId),

    #[error("Malformed template content: {0}")]
    Content(#[from] serde_json::Error),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Result of a successful clone: the new template plus its newly created
/// top-level document attachments, in original document order. Preview
/// images exist by the time this is returned but are not part of the value.
#[derive(Debug, Serialize)]
pub struct ClonedTemplate {
    pub template: Template,
    pub documents: Vec<TemplateDocument>,
}

/// Clones a template and its eligible attachments.
pub struct TemplateCloneRepo;

impl TemplateCloneRepo {
    /// Clone `template_id` into a new independent template.
    ///
    /// Phase one copies the template row and remaps its schema identifiers,
    /// persisting the rewritten content as a single durable write. Phase two
    /// walks the original documents and, for every identifier present in the
    /// map, creates a new document attachment (and its preview images) bound
    /// to the same blob. Documents whose identifier was excluded produce no
    /// clone and no error.
    pub async fn clone_attachments(
        pool: &PgPool,
        template_id: DbId,
        params: &CloneAttachmentsParams,
    ) -> Result<ClonedTemplate, CloneError> {
        let mut tx = pool.begin().await?;

        let original = Self::find_for_clone(&mut tx, template_id)
            .await?
            .ok_or(CloneError::TemplateNotFound(template_id))?;

        // New template starts as a verbatim copy of the original's content.
        let name = params
            .name
            .clone()
            .unwrap_or_else(|| format!("{} (Clone)", original.name));
        let template = Self::insert_copy(&mut tx, &original, &name).await?;

        // Phase one: remap schema identifiers and persist the mutated content.
        let mut content = template.content()?;
        let excluded: HashSet<_> = params.excluded_attachment_uuids.iter().copied().collect();
        let map = remap_schema(&mut content, &params.replacement_names, &excluded);

        let template = TemplateRepo::update_content(&mut tx, template.id, &content)
            .await?
            .ok_or(CloneError::TemplateNotFound(template.id))?;

        // Phase two: clone eligible documents, then their previews, in order.
        let originals = Self::documents_in_order(&mut tx, original.id).await?;
        let documents = Self::clone_documents(&mut tx, template.id, &originals, &map).await?;

        tx.commit().await?;

        tracing::info!(
            original_id = original.id,
            template_id = template.id,
            remapped = map.len(),
            documents = documents.len(),
            "Template cloned"
        );

        Ok(ClonedTemplate {
            template,
            documents,
        })
    }

    /// Create new document attachments for every original whose identifier
    /// appears in the map. Skipped originals are a filter, not an error.
    async fn clone_documents(
        conn: &mut PgConnection,
        new_template_id: DbId,
        originals: &[TemplateDocument],
        map: &UuidMap,
    ) -> Result<Vec<TemplateDocument>, sqlx::Error> {
        let mut created = Vec::new();

        for original in originals {
            let Some(new_uuid) = map.get(&original.uuid) else {
                continue;
            };

            // Same blob, new identifier. The insert is side-effect scoped:
            // it must not bump the owning template's timestamps.
            let document = DocumentRepo::create(
                &mut *conn,
                &CreateDocument {
                    template_id: new_template_id,
                    uuid: *new_uuid,
                    blob_id: original.blob_id,
                },
                false,
            )
            .await?;

            Self::clone_previews(&mut *conn, original.id, document.id).await?;

            created.push(document);
        }

        Ok(created)
    }

    /// Clone every preview image of `original_id` under `new_id`, in
    /// original order, sharing blobs.
    async fn clone_previews(
        conn: &mut PgConnection,
        original_id: DbId,
        new_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let query = format!(
            "SELECT {PREVIEW_COLUMNS} FROM document_preview_images
             WHERE document_id = $1 ORDER BY id"
        );
        let previews: Vec<crate::models::document::PreviewImage> =
            sqlx::query_as(&query).bind(original_id).fetch_all(&mut *conn).await?;

        for preview in previews {
            DocumentRepo::create_preview(&mut *conn, new_id, preview.blob_id).await?;
        }

        Ok(())
    }

    async fn find_for_clone(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM templates WHERE id = $1",
            template_repo::COLUMNS
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    async fn insert_copy(
        conn: &mut PgConnection,
        original: &Template,
        name: &str,
    ) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (name, schema, fields)
             VALUES ($1, $2, $3)
             RETURNING {}",
            template_repo::COLUMNS
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(name)
            .bind(&original.schema)
            .bind(&original.fields)
            .fetch_one(conn)
            .await
    }

    async fn documents_in_order(
        conn: &mut PgConnection,
        template_id: DbId,
    ) -> Result<Vec<TemplateDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM template_documents WHERE template_id = $1 ORDER BY id",
            crate::repositories::document_repo::DOCUMENT_COLUMNS
        );
        sqlx::query_as::<_, TemplateDocument>(&query)
            .bind(template_id)
            .fetch_all(conn)
            .await
    }
}

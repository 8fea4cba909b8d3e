//! Repository for the `templates` table.

use formloom_core::template::TemplateContent;
use formloom_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::template::{CreateTemplate, Template};

/// Column list for templates queries.
pub(crate) const COLUMNS: &str = "id, name, schema, fields, created_at, updated_at";

/// Provides CRUD operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let schema = input.schema.clone().unwrap_or(serde_json::json!([]));
        let fields = input.fields.clone().unwrap_or(serde_json::json!([]));

        let query = format!(
            "INSERT INTO templates (name, schema, fields)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.name)
            .bind(&schema)
            .bind(&fields)
            .fetch_one(pool)
            .await
    }

    /// Find a template by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all templates, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// Persist mutated template content as a single durable write.
    ///
    /// This is the only statement that rewrites `schema` and `fields`, so a
    /// template is either fully rewritten or not at all. Returns the updated
    /// row, or `None` if the template no longer exists.
    pub async fn update_content(
        conn: &mut PgConnection,
        id: DbId,
        content: &TemplateContent,
    ) -> Result<Option<Template>, sqlx::Error> {
        let schema = serde_json::to_value(&content.schema)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let fields = serde_json::to_value(&content.fields)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "UPDATE templates SET schema = $2, fields = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(schema)
            .bind(fields)
            .fetch_optional(conn)
            .await
    }

    /// Delete a template by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

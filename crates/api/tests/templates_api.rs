//! Integration tests for the template endpoints, including the clone surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;
use uuid::Uuid;

use formloom_db::models::blob::CreateBlob;
use formloom_db::models::document::CreateDocument;
use formloom_db::models::template::CreateTemplate;
use formloom_db::repositories::{BlobRepo, DocumentRepo, TemplateRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a template with `items` schema items and one document per item.
/// Returns the template id and the schema uuids.
async fn seed_template(pool: &PgPool, items: usize) -> (i64, Vec<Uuid>) {
    let uuids: Vec<Uuid> = (0..items).map(|_| Uuid::new_v4()).collect();

    let schema: Vec<serde_json::Value> = uuids
        .iter()
        .enumerate()
        .map(|(i, u)| serde_json::json!({ "attachment_uuid": u, "name": format!("Doc {i}") }))
        .collect();
    let fields: Vec<serde_json::Value> = uuids
        .iter()
        .map(|u| serde_json::json!({ "areas": [{ "attachment_uuid": u }] }))
        .collect();

    let template = TemplateRepo::create(
        pool,
        &CreateTemplate {
            name: "Onboarding Pack".to_string(),
            schema: Some(serde_json::Value::Array(schema)),
            fields: Some(serde_json::Value::Array(fields)),
        },
    )
    .await
    .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    for (i, uuid) in uuids.iter().enumerate() {
        let blob = BlobRepo::create(
            pool,
            &CreateBlob {
                key: format!("blob-{}-{i}", template.id),
                filename: format!("doc-{i}.pdf"),
                content_type: Some("application/pdf".to_string()),
                byte_size: 512,
                checksum: None,
            },
        )
        .await
        .unwrap();

        DocumentRepo::create(
            &mut conn,
            &CreateDocument {
                template_id: template.id,
                uuid: *uuid,
                blob_id: blob.id,
            },
            false,
        )
        .await
        .unwrap();
    }

    (template.id, uuids)
}

// ---------------------------------------------------------------------------
// Test: create and fetch a template
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_get_template(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/templates",
        serde_json::json!({ "name": "NDA" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["data"]["name"], "NDA");
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(app.clone(), &format!("/api/v1/templates/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["id"], id);

    let response = get(app, "/api/v1/templates").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: blank template name is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_template_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/templates",
        serde_json::json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: fetching a missing template returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_template_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/templates/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: clone endpoint produces a new template with cloned documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn clone_endpoint_creates_independent_copy(pool: PgPool) {
    let (template_id, uuids) = seed_template(&pool, 3).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        &format!("/api/v1/templates/{template_id}/clone"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let new_id = json["data"]["template"]["id"].as_i64().unwrap();
    assert_ne!(new_id, template_id);
    assert_eq!(json["data"]["template"]["name"], "Onboarding Pack (Clone)");

    let documents = json["data"]["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 3);
    for (document, old_uuid) in documents.iter().zip(&uuids) {
        assert_ne!(document["uuid"], old_uuid.to_string());
    }

    // The new template's documents are queryable through the API.
    let response = get(app, &format!("/api/v1/templates/{new_id}/documents")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Test: exclusions pass through the clone endpoint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn clone_endpoint_honors_exclusions(pool: PgPool) {
    let (template_id, uuids) = seed_template(&pool, 3).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        &format!("/api/v1/templates/{template_id}/clone"),
        serde_json::json!({
            "name": "Trimmed Copy",
            "excluded_attachment_uuids": [uuids[1]],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["template"]["name"], "Trimmed Copy");

    let documents = json["data"]["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 2);

    // The excluded identifier survives in the cloned schema.
    let schema = json["data"]["template"]["schema"].as_array().unwrap();
    assert_eq!(schema[1]["attachment_uuid"], uuids[1].to_string());
}

// ---------------------------------------------------------------------------
// Test: cloning a missing template returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn clone_of_missing_template_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/templates/424242/clone",
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

//! HTTP surface tests for the item API.
//!
//! The status probe runs entirely in process. The CRUD round trip drives
//! the real router against live PostgreSQL (configured through
//! DB_HOST/DB_NAME/DB_USER/DB_PASS) and is ignored by default:
//!
//!     cargo test -p shelfd-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use shelfd_core::DbConfig;
use shelfd_server::{build_router, AppState};
use tower::ServiceExt;

fn router() -> Router {
    build_router(AppState::new(DbConfig::from_env()))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn clear_items() {
    let config = DbConfig::from_env();
    shelfd_core::with_transaction(&config, |tx| {
        Box::pin(async move {
            sqlx::query("DELETE FROM items").execute(&mut **tx).await?;
            Ok::<_, sqlx::Error>(())
        })
    })
    .await
    .expect("failed to clear items table");
}

#[tokio::test]
async fn test_status_needs_no_database() {
    let response = router().oneshot(get("/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "OK" }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_item_crud_round_trip() {
    let app = router();
    clear_items().await;

    // Empty table lists as an empty array
    let response = app.clone().oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    // Create two items; ids and timestamps are server-assigned
    let response = app
        .clone()
        .oneshot(post_json(
            "/items",
            json!({ "name": "Test Item 1", "description": "Desc 1" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;
    assert_eq!(first["name"], "Test Item 1");
    assert_eq!(first["description"], "Desc 1");
    assert!(first["id"].is_i64());
    assert!(first["created_at"].is_string());

    let response = app
        .clone()
        .oneshot(post_json("/items", json!({ "name": "Test Item 2" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let second = body_json(response).await;
    assert_eq!(second["description"], Value::Null);

    // Listing returns both, newest id first
    let response = app.clone().oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let listed = listed.as_array().expect("array body");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);
    assert_eq!(listed[1]["id"], first["id"]);

    // Delete one: 204 with an empty body, row gone
    let target = second["id"].as_i64().unwrap();
    let response = app
        .clone()
        .oneshot(delete(&format!("/items/{target}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let response = app.clone().oneshot(get("/items")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Deleting the same id again reports the checked not-found condition
    let response = app
        .clone()
        .oneshot(delete(&format!("/items/{target}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "detail": "Item not found" })
    );
}

//! Tests for the health endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::MemoryDatabase;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_ok_when_store_reachable() {
    let app = routes::create_router(AppState::new(MemoryDatabase::new()));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_unavailable_when_store_fails() {
    let db = Arc::new(MemoryDatabase::new());
    db.set_failing(true);
    let app = routes::create_router(AppState::from_arc(db));

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn openapi_document_lists_project_paths() {
    let app = routes::create_router(AppState::new(MemoryDatabase::new()));

    let (status, body) = get(app, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/projects"]["get"].is_object());
    assert!(body["paths"]["/projects/{name}"]["put"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
}

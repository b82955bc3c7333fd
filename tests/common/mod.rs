//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use serde_json::Value;

use job_board::{create_router, AppState, Config, Database};

/// Fresh in-memory store with all migrations applied.
pub async fn test_database() -> Arc<Database> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite should open");
    Arc::new(db)
}

/// Router wired to store-backed services over a fresh database.
pub async fn test_app() -> Router {
    let db = test_database().await;
    create_router(AppState::from_database(db, Config::default()))
}

/// Build a request, with a JSON body when given.
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse response body as JSON
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

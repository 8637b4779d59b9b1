// tests/support/helpers.rs
use super::builders::sample_catalog;
use super::mocks::{FixedClock, InMemoryBookmarks, InMemoryComments, InMemoryProgress, StaticContent};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use fable_foundry::application::services::ApplicationServices;
use fable_foundry::domain::content::ContentSource;
use fable_foundry::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const USER_ID: &str = "6f1c2a4e-8d0b-4c55-9a31-2f7e9b0d4c11";
pub const OTHER_USER_ID: &str = "0b9d7f3a-1c2e-4f60-8a47-5e3d2c1b0a99";

pub fn router_with_content(content: Arc<dyn ContentSource>) -> Router {
    let services = Arc::new(ApplicationServices::new(
        content,
        Arc::new(InMemoryBookmarks::default()),
        Arc::new(InMemoryProgress::default()),
        Arc::new(InMemoryComments::default()),
        Arc::new(FixedClock::default()),
    ));
    build_router(HttpState { services })
}

/// Router over [`sample_catalog`] with empty in-memory user state.
pub fn make_test_router() -> Router {
    let (stories, narrators) = sample_catalog();
    router_with_content(Arc::new(StaticContent::new(stories, narrators)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("expected json body, got: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Asserts an `{ "error": ... }` body with the expected status and message.
pub fn assert_error(status: StatusCode, json: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    assert_eq!(json["error"], expected_error, "unexpected error body: {json}");
}

pub fn slugs(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|story| story["slug"].as_str().unwrap_or_default().to_string())
        .collect()
}

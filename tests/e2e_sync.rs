// tests/e2e_sync.rs
use axum::Router;
use axum::http::{Method, StatusCode};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use support::{StaticContent, StoryBuilder, narrator, sample_catalog};

mod support;

async fn sync(app: &Router) -> (StatusCode, serde_json::Value) {
    support::send(app, Method::POST, "/api/v1/sync", None).await
}

#[tokio::test]
async fn consistent_catalog_syncs_cleanly() {
    let (stories, narrators) = sample_catalog();
    let content = Arc::new(StaticContent::new(stories, narrators));
    let app = support::router_with_content(content.clone());

    let (status, json) = sync(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["updated"], 6);
    assert_eq!(json["message"], "Successfully synchronized 6 items");
    assert!(json.get("errors").is_none());
    assert_eq!(content.refreshes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dangling_narrator_reference_is_reported() {
    let (mut stories, narrators) = sample_catalog();
    stories.push(
        StoryBuilder::new("orphaned-tale")
            .title("Orphaned Tale")
            .narrator(narrator("cal", "Cal Reyes"))
            .build(),
    );
    let app = support::router_with_content(Arc::new(StaticContent::new(stories, narrators)));

    let (status, json) = sync(&app).await;
    assert_eq!(status, StatusCode::MULTI_STATUS);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Synchronization completed with errors");
    assert_eq!(json["updated"], 7);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("Orphaned Tale"));
}

#[tokio::test]
async fn unreachable_source_fails_the_sync() {
    let app = support::router_with_content(Arc::new(StaticContent::unavailable()));
    let (status, json) = sync(&app).await;
    support::assert_error(
        status,
        &json,
        StatusCode::SERVICE_UNAVAILABLE,
        "Content temporarily unavailable",
    );
}

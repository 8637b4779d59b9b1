// tests/e2e_catalog.rs
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

mod support;

#[tokio::test]
async fn health_returns_ok() {
    let app = support::make_test_router();
    let (status, json) = support::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn default_listing_is_newest_first_with_pagination_and_filters() {
    let app = support::make_test_router();
    let (status, json) = support::get(&app, "/api/v1/stories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        support::slugs(&json),
        [
            "songs-of-the-ancient-oak",
            "whispers-in-the-wind",
            "the-last-library",
            "midnight-at-the-crossroads"
        ]
    );
    assert_eq!(
        json["pagination"],
        json!({
            "page": 1,
            "limit": 20,
            "total": 4,
            "totalPages": 1,
            "hasNext": false,
            "hasPrev": false
        })
    );
    assert_eq!(json["filters"]["totalResults"], 4);
    assert_eq!(json["filters"]["applied"]["sortBy"], "newest");
    assert_eq!(json["filters"]["applied"]["sortOrder"], "desc");
}

#[tokio::test]
async fn listing_omits_story_body() {
    let app = support::make_test_router();
    let (_, json) = support::get(&app, "/api/v1/stories?limit=1").await;
    let story = &json["data"][0];
    assert!(story.get("content").is_none());
    assert_eq!(story["metadata"]["durationLabel"], "1h 30m");
}

#[tokio::test]
async fn sort_keys_use_their_default_direction() {
    let app = support::make_test_router();

    let (_, json) = support::get(&app, "/api/v1/stories?sortBy=oldest").await;
    assert_eq!(
        support::slugs(&json),
        [
            "midnight-at-the-crossroads",
            "the-last-library",
            "whispers-in-the-wind",
            "songs-of-the-ancient-oak"
        ]
    );

    let (_, json) = support::get(&app, "/api/v1/stories?sortBy=popular").await;
    assert_eq!(
        support::slugs(&json),
        [
            "the-last-library",
            "whispers-in-the-wind",
            "midnight-at-the-crossroads",
            "songs-of-the-ancient-oak"
        ]
    );

    let (_, json) = support::get(&app, "/api/v1/stories?sortBy=title").await;
    assert_eq!(
        support::slugs(&json),
        [
            "midnight-at-the-crossroads",
            "songs-of-the-ancient-oak",
            "the-last-library",
            "whispers-in-the-wind"
        ]
    );
}

#[tokio::test]
async fn explicit_order_overrides_the_default() {
    let app = support::make_test_router();
    let (_, json) = support::get(&app, "/api/v1/stories?sortBy=duration&sortOrder=desc").await;
    assert_eq!(
        support::slugs(&json),
        [
            "songs-of-the-ancient-oak",
            "the-last-library",
            "whispers-in-the-wind",
            "midnight-at-the-crossroads"
        ]
    );
    assert_eq!(json["filters"]["applied"]["sortOrder"], "desc");
}

#[tokio::test]
async fn filters_combine_across_dimensions() {
    let app = support::make_test_router();

    let (_, json) = support::get(&app, "/api/v1/stories?genre=Mystery").await;
    assert_eq!(
        support::slugs(&json),
        ["the-last-library", "midnight-at-the-crossroads"]
    );

    let (_, json) =
        support::get(&app, "/api/v1/stories?genre=Fantasy&difficulty=advanced").await;
    assert_eq!(support::slugs(&json), ["songs-of-the-ancient-oak"]);

    let (_, json) = support::get(&app, "/api/v1/stories?minDuration=20&maxDuration=45").await;
    assert_eq!(
        support::slugs(&json),
        ["whispers-in-the-wind", "the-last-library"]
    );
    assert_eq!(
        json["filters"]["applied"]["duration"],
        json!({ "min": 20, "max": 45 })
    );

    let (_, json) = support::get(&app, "/api/v1/stories?narrator=ben&genre=Horror&genre=Mystery").await;
    assert_eq!(
        support::slugs(&json),
        ["the-last-library", "midnight-at-the-crossroads"]
    );
}

#[tokio::test]
async fn search_is_trimmed_and_case_insensitive() {
    let app = support::make_test_router();

    let (_, json) = support::get(&app, "/api/v1/stories?search=%20%20LIBRARY%20").await;
    assert_eq!(support::slugs(&json), ["the-last-library"]);
    assert_eq!(json["filters"]["applied"]["search"], "LIBRARY");

    let (_, json) = support::get(&app, "/api/v1/stories?search=okafor").await;
    assert_eq!(
        support::slugs(&json),
        ["the-last-library", "midnight-at-the-crossroads"]
    );

    let (_, json) = support::get(&app, "/api/v1/stories?search=%20%20").await;
    assert_eq!(json["filters"]["totalResults"], 4);
}

#[tokio::test]
async fn second_page_and_page_past_the_end() {
    let app = support::make_test_router();

    let (_, json) = support::get(&app, "/api/v1/stories?page=2&limit=3").await;
    assert_eq!(support::slugs(&json), ["midnight-at-the-crossroads"]);
    assert_eq!(json["pagination"]["totalPages"], 2);
    assert_eq!(json["pagination"]["hasNext"], false);
    assert_eq!(json["pagination"]["hasPrev"], true);

    let (status, json) = support::get(&app, "/api/v1/stories?page=5&limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(support::slugs(&json).is_empty());
    assert_eq!(json["pagination"]["hasNext"], false);
    assert_eq!(json["pagination"]["hasPrev"], true);
    assert_eq!(json["filters"]["totalResults"], 4);
}

#[tokio::test]
async fn invalid_pagination_is_rejected_with_details() {
    let app = support::make_test_router();

    let (status, json) = support::get(&app, "/api/v1/stories?page=0&limit=101").await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid pagination parameters");
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);

    let (status, json) = support::get(&app, "/api/v1/stories?limit=ten").await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid pagination parameters");
    assert_eq!(json["details"][0], "limit: must be an integer");
}

#[tokio::test]
async fn invalid_filters_are_rejected() {
    let app = support::make_test_router();

    for uri in [
        "/api/v1/stories?difficulty=expert",
        "/api/v1/stories?sortBy=loudest",
        "/api/v1/stories?sortOrder=sideways",
        "/api/v1/stories?maxDuration=301",
        "/api/v1/stories?minDuration=-5",
        "/api/v1/stories?minDuration=short",
    ] {
        let (status, json) = support::get(&app, uri).await;
        support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid filter parameters");
    }
}

#[tokio::test]
async fn inverted_duration_bounds_match_nothing() {
    let app = support::make_test_router();
    let (status, json) = support::get(&app, "/api/v1/stories?minDuration=60&maxDuration=30").await;
    assert_eq!(status, StatusCode::OK);
    assert!(support::slugs(&json).is_empty());
    assert_eq!(json["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn post_search_accepts_structured_body() {
    let app = support::make_test_router();
    let body = json!({
        "filters": {
            "genre": ["Fantasy"],
            "duration": { "max": 60 },
            "sortBy": "rating"
        },
        "pagination": { "page": 1, "limit": 10 }
    });
    let (status, json) = support::post(&app, "/api/v1/stories/search", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(support::slugs(&json), ["whispers-in-the-wind"]);
    assert_eq!(json["filters"]["applied"]["sortOrder"], "desc");
    assert_eq!(json["pagination"]["limit"], 10);
}

#[tokio::test]
async fn post_search_rejects_bad_input() {
    let app = support::make_test_router();

    let (status, json) = support::post(
        &app,
        "/api/v1/stories/search",
        json!({ "pagination": { "page": 1, "limit": 500 } }),
    )
    .await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid pagination parameters");

    let (status, json) = support::post(
        &app,
        "/api/v1/stories/search",
        json!({ "filters": { "genre": "Fantasy" } }),
    )
    .await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid request body");
}

#[tokio::test]
async fn story_detail_by_slug() {
    let app = support::make_test_router();

    let (status, json) = support::get(&app, "/api/v1/stories/whispers-in-the-wind").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Whispers in the Wind");
    assert_eq!(json["data"]["narrator"]["name"], "Ava Stone");
    assert!(json["data"]["content"].is_array());
    assert_eq!(json["data"]["publishedLabel"], "March 10, 2024");

    let (status, json) = support::get(&app, "/api/v1/stories/no-such-story").await;
    support::assert_error(status, &json, StatusCode::NOT_FOUND, "Story not found");
}

#[tokio::test]
async fn genres_and_featured() {
    let app = support::make_test_router();

    let (_, json) = support::get(&app, "/api/v1/genres").await;
    assert_eq!(json["data"], json!(["Adventure", "Fantasy", "Horror", "Mystery"]));

    let (_, json) = support::get(&app, "/api/v1/stories/featured").await;
    assert_eq!(
        support::slugs(&json),
        ["whispers-in-the-wind", "midnight-at-the-crossroads"]
    );
}

#[tokio::test]
async fn unreachable_content_source_returns_503() {
    let app = support::router_with_content(Arc::new(support::StaticContent::unavailable()));
    let (status, json) = support::get(&app, "/api/v1/stories").await;
    support::assert_error(
        status,
        &json,
        StatusCode::SERVICE_UNAVAILABLE,
        "Content temporarily unavailable",
    );
}

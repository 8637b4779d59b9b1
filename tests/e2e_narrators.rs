// tests/e2e_narrators.rs
use axum::http::StatusCode;

mod support;

#[tokio::test]
async fn simple_listing_is_unpaged_and_sorted_by_name() {
    let app = support::make_test_router();
    let (status, json) = support::get(&app, "/api/v1/narrators?simple=true").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("pagination").is_none());
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ava Stone", "ben Okafor"]);
    assert!(json["data"][0].get("bio").is_none());
}

#[tokio::test]
async fn paged_listing_reports_totals() {
    let app = support::make_test_router();
    let (status, json) = support::get(&app, "/api/v1/narrators?limit=1&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["slug"], "ben");
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["pagination"]["totalPages"], 2);
    assert_eq!(json["pagination"]["hasPrev"], true);

    let (status, json) = support::get(&app, "/api/v1/narrators?limit=0").await;
    support::assert_error(status, &json, StatusCode::BAD_REQUEST, "Invalid pagination parameters");
}

#[tokio::test]
async fn profile_lists_voiced_stories_newest_first() {
    let app = support::make_test_router();

    let (status, json) = support::get(&app, "/api/v1/narrators/ben").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["narrator"]["name"], "ben Okafor");
    let stories: Vec<&str> = json["data"]["stories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["slug"].as_str().unwrap())
        .collect();
    assert_eq!(stories, ["the-last-library", "midnight-at-the-crossroads"]);

    let (status, json) = support::get(&app, "/api/v1/narrators/nobody").await;
    support::assert_error(status, &json, StatusCode::NOT_FOUND, "Narrator not found");
}

// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{comments, library, narrators, stories, sync},
    middleware::{RateLimitSettings, rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty or `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterOptions::default())
}

pub fn build_router_with(state: HttpState, options: RouterOptions) -> Router {
    let mut api = api_routes();
    if let Some(settings) = options.rate_limit {
        match rate_limit_layer(settings) {
            Some(layer) => api = api.layer(layer),
            None => warn!(?settings, "invalid rate limit settings, limiter disabled"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/stories", get(stories::list_stories))
        .route("/stories/search", post(stories::search_stories))
        .route("/stories/featured", get(stories::featured_stories))
        .route("/stories/{slug}", get(stories::get_story_by_slug))
        .route("/genres", get(stories::list_genres))
        .route("/narrators", get(narrators::list_narrators))
        .route("/narrators/{slug}", get(narrators::get_narrator_by_slug))
        .route(
            "/user/bookmarks",
            get(library::list_bookmarks)
                .post(library::add_bookmark)
                .delete(library::remove_bookmark),
        )
        .route(
            "/user/progress",
            get(library::list_progress).post(library::record_progress),
        )
        .route(
            "/comments",
            get(comments::list_comments).post(comments::post_comment),
        )
        .route("/sync", post(sync::sync_content))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

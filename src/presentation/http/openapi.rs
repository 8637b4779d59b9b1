// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";
const LOCAL_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::stories::list_stories,
        crate::presentation::http::controllers::stories::search_stories,
        crate::presentation::http::controllers::stories::featured_stories,
        crate::presentation::http::controllers::stories::get_story_by_slug,
        crate::presentation::http::controllers::stories::list_genres,
        crate::presentation::http::controllers::narrators::list_narrators,
        crate::presentation::http::controllers::narrators::get_narrator_by_slug,
        crate::presentation::http::controllers::library::list_bookmarks,
        crate::presentation::http::controllers::library::add_bookmark,
        crate::presentation::http::controllers::library::remove_bookmark,
        crate::presentation::http::controllers::library::list_progress,
        crate::presentation::http::controllers::library::record_progress,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::post_comment,
        crate::presentation::http::controllers::sync::sync_content,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::stories::StorySearchRequest,
            crate::presentation::http::controllers::stories::StoryFiltersRequest,
            crate::presentation::http::controllers::stories::DurationRequest,
            crate::presentation::http::controllers::stories::PaginationRequest,
            crate::presentation::http::controllers::stories::StoryListResponse,
            crate::presentation::http::controllers::stories::FiltersSummary,
            crate::presentation::http::controllers::stories::StoryResponse,
            crate::presentation::http::controllers::stories::StoryCollectionResponse,
            crate::presentation::http::controllers::stories::GenreListResponse,
            crate::presentation::http::controllers::narrators::NarratorListResponse,
            crate::presentation::http::controllers::narrators::NarratorItems,
            crate::presentation::http::controllers::narrators::NarratorProfileResponse,
            crate::presentation::http::controllers::library::BookmarkRequest,
            crate::presentation::http::controllers::library::ProgressRequest,
            crate::presentation::http::controllers::library::BookmarkListResponse,
            crate::presentation::http::controllers::library::BookmarkResponse,
            crate::presentation::http::controllers::library::MessageResponse,
            crate::presentation::http::controllers::library::ProgressListResponse,
            crate::presentation::http::controllers::library::ProgressResponse,
            crate::presentation::http::controllers::comments::CommentRequest,
            crate::presentation::http::controllers::comments::CommentListResponse,
            crate::presentation::http::controllers::comments::CommentResponse,
            crate::presentation::http::controllers::sync::SyncResponse,
            crate::application::dto::StoryDto,
            crate::application::dto::StoryMetadataDto,
            crate::application::dto::StoryAudioDto,
            crate::application::dto::CoverImageDto,
            crate::application::dto::NarratorDto,
            crate::application::dto::NarratorSummaryDto,
            crate::application::dto::NarratorAvatarDto,
            crate::application::dto::VoiceProfileDto,
            crate::application::dto::SocialLinksDto,
            crate::application::dto::NarratorProfileDto,
            crate::application::dto::PaginationDto,
            crate::application::dto::AppliedFiltersDto,
            crate::application::dto::DurationBoundsDto,
            crate::application::dto::BookmarkDto,
            crate::application::dto::ReadingProgressDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentAuthorDto
        )
    ),
    tags(
        (name = "Stories", description = "Catalog browsing, search and story detail"),
        (name = "Narrators", description = "Narrator listings and profiles"),
        (name = "Library", description = "Bookmarks and listening progress"),
        (name = "Comments", description = "Threaded story discussion"),
        (name = "System", description = "Health and content synchronisation")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Fable Foundry API",
        description = "Story catalog and listening-library backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == LOCAL_SERVER) {
            urls.push(LOCAL_SERVER.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` (default
/// `docs/openapi.json`) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/stories",
            "/api/v1/stories/{slug}",
            "/api/v1/user/bookmarks",
            "/api/v1/comments",
            "/api/v1/sync",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn search_body_schema_carries_paging_defaults() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paging = &doc["components"]["schemas"]["PaginationRequest"]["properties"];
        assert_eq!(paging["page"]["default"], 1);
        assert_eq!(paging["limit"]["default"], 20);
        assert!(doc["components"]["schemas"]["StorySearchRequest"].is_object());
    }

    #[test]
    fn local_server_is_always_listed() {
        let doc = ApiDoc::openapi();
        let servers = doc.servers.unwrap_or_default();
        assert!(servers.iter().any(|s| s.url == LOCAL_SERVER));
    }
}

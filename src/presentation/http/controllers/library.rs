// src/presentation/http/controllers/library.rs
use crate::application::{
    commands::library::{AddBookmarkCommand, RecordProgressCommand, RemoveBookmarkCommand},
    dto::{BookmarkDto, ReadingProgressDto},
    queries::library::{ListBookmarksQuery, ListProgressQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryPairs};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
    #[schema(minimum = 0, maximum = 100)]
    pub progress_percentage: Option<f64>,
    /// Seconds into the narration; defaults to 0.
    pub last_position: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookmarkListResponse {
    pub success: bool,
    pub data: Vec<BookmarkDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookmarkResponse {
    pub success: bool,
    pub data: BookmarkDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressListResponse {
    pub success: bool,
    pub data: Vec<ReadingProgressDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProgressResponse {
    pub success: bool,
    pub data: ReadingProgressDto,
}

fn owned(params: &QueryPairs, key: &str) -> Option<String> {
    params.first(key).map(str::to_string)
}

#[utoipa::path(
    get,
    path = "/api/v1/user/bookmarks",
    params(("userId" = String, Query, description = "Owner of the bookmarks")),
    responses(
        (status = 200, description = "Bookmarks, newest first.", body = BookmarkListResponse),
        (status = 400, description = "Missing or malformed user id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Library"
)]
pub async fn list_bookmarks(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<BookmarkListResponse>> {
    let data = state
        .services
        .library_queries
        .list_bookmarks(ListBookmarksQuery {
            user_id: owned(&params, "userId"),
        })
        .await
        .into_http()?;
    Ok(Json(BookmarkListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/bookmarks",
    request_body = BookmarkRequest,
    responses(
        (status = 201, description = "Bookmark created.", body = BookmarkResponse),
        (status = 400, description = "Missing user or story id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Story already bookmarked.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Library"
)]
pub async fn add_bookmark(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<BookmarkRequest>,
) -> HttpResult<(StatusCode, Json<BookmarkResponse>)> {
    let data = state
        .services
        .library_commands
        .add_bookmark(AddBookmarkCommand {
            user_id: payload.user_id,
            story_id: payload.story_id,
        })
        .await
        .into_http()?;
    Ok((
        StatusCode::CREATED,
        Json(BookmarkResponse {
            success: true,
            data,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/user/bookmarks",
    params(
        ("userId" = String, Query, description = "Owner of the bookmark"),
        ("storyId" = String, Query, description = "Bookmarked story")
    ),
    responses(
        (status = 200, description = "Bookmark removed.", body = MessageResponse),
        (status = 400, description = "Missing user or story id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such bookmark.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Library"
)]
pub async fn remove_bookmark(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .library_commands
        .remove_bookmark(RemoveBookmarkCommand {
            user_id: owned(&params, "userId"),
            story_id: owned(&params, "storyId"),
        })
        .await
        .into_http()?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Bookmark removed".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/user/progress",
    params(
        ("userId" = String, Query, description = "Listener"),
        ("storyId" = Option<String>, Query, description = "Restrict to one story")
    ),
    responses(
        (status = 200, description = "Progress records, most recently updated first.", body = ProgressListResponse),
        (status = 400, description = "Missing or malformed user id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Library"
)]
pub async fn list_progress(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<ProgressListResponse>> {
    let data = state
        .services
        .library_queries
        .list_progress(ListProgressQuery {
            user_id: owned(&params, "userId"),
            story_id: owned(&params, "storyId"),
        })
        .await
        .into_http()?;
    Ok(Json(ProgressListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/user/progress",
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "Progress stored, replacing any earlier record.", body = ProgressResponse),
        (status = 400, description = "Invalid progress data.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Library"
)]
pub async fn record_progress(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ProgressRequest>,
) -> HttpResult<Json<ProgressResponse>> {
    let data = state
        .services
        .library_commands
        .record_progress(RecordProgressCommand {
            user_id: payload.user_id,
            story_id: payload.story_id,
            progress_percentage: payload.progress_percentage,
            last_position: payload.last_position,
        })
        .await
        .into_http()?;
    Ok(Json(ProgressResponse {
        success: true,
        data,
    }))
}

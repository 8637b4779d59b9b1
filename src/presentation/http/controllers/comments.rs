// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::PostCommentCommand, dto::CommentDto, queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryPairs};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
    /// 1 to 1000 characters.
    pub content: Option<String>,
    /// Comment being replied to; must belong to the same story.
    pub parent_id: Option<Uuid>,
    pub author_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub success: bool,
    pub data: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub success: bool,
    pub data: CommentDto,
}

#[utoipa::path(
    get,
    path = "/api/v1/comments",
    params(("storyId" = String, Query, description = "Story whose discussion to load")),
    responses(
        (status = 200, description = "Threads, newest first, replies oldest first.", body = CommentListResponse),
        (status = 400, description = "Missing story id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<CommentListResponse>> {
    let data = state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            story_id: params.first("storyId").map(str::to_string),
        })
        .await
        .into_http()?;
    Ok(Json(CommentListResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment posted.", body = CommentResponse),
        (status = 400, description = "Invalid comment data.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Parent comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn post_comment(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let data = state
        .services
        .comment_commands
        .post_comment(PostCommentCommand {
            user_id: payload.user_id,
            story_id: payload.story_id,
            content: payload.content,
            parent_id: payload.parent_id,
            author_name: payload.author_name,
        })
        .await
        .into_http()?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            success: true,
            data,
        }),
    ))
}

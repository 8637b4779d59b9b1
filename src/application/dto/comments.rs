use crate::application::formatting::format_relative_time;
use crate::domain::community::{Comment, CommentThread};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthorDto {
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub story_id: String,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub upvotes: u32,
    pub author: CommentAuthorDto,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    pub posted_ago: String,
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}

impl CommentDto {
    pub fn from_comment(comment: Comment, now: DateTime<Utc>) -> Self {
        Self {
            id: comment.id.into(),
            user_id: comment.user_id.into(),
            story_id: comment.story_id.into(),
            parent_id: comment.parent_id.map(Into::into),
            content: comment.body.as_str().to_string(),
            upvotes: comment.upvotes,
            author: CommentAuthorDto {
                display_name: comment.author_name.as_str().to_string(),
            },
            posted_ago: format_relative_time(comment.created_at, now),
            created_at: comment.created_at,
            replies: Vec::new(),
        }
    }

    pub fn from_thread(thread: CommentThread, now: DateTime<Utc>) -> Self {
        let mut dto = Self::from_comment(thread.comment, now);
        dto.replies = thread
            .replies
            .into_iter()
            .map(|reply| Self::from_thread(reply, now))
            .collect();
        dto
    }
}

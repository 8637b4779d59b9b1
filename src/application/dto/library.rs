use crate::domain::library::{Bookmark, ReadingProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub story_id: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkDto {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            user_id: bookmark.user_id.into(),
            story_id: bookmark.story_id.into(),
            created_at: bookmark.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgressDto {
    pub user_id: Uuid,
    pub story_id: String,
    pub progress_percentage: f64,
    pub last_position: f64,
    pub finished: bool,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<ReadingProgress> for ReadingProgressDto {
    fn from(progress: ReadingProgress) -> Self {
        Self {
            finished: progress.is_finished(),
            user_id: progress.user_id.into(),
            story_id: progress.story_id.into(),
            progress_percentage: progress.progress_percentage.get(),
            last_position: progress.last_position.get(),
            updated_at: progress.updated_at,
        }
    }
}

// src/domain/library/entity.rs
use crate::domain::library::value_objects::{LastPosition, ProgressPercentage, UserId};
use crate::domain::story::StoryId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: UserId,
    pub story_id: StoryId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub user_id: UserId,
    pub story_id: StoryId,
    pub created_at: DateTime<Utc>,
}

/// One row per `(user_id, story_id)`; writes replace the previous value.
#[derive(Debug, Clone)]
pub struct ReadingProgress {
    pub user_id: UserId,
    pub story_id: StoryId,
    pub progress_percentage: ProgressPercentage,
    pub last_position: LastPosition,
    pub updated_at: DateTime<Utc>,
}

impl ReadingProgress {
    pub fn is_finished(&self) -> bool {
        self.progress_percentage.get() >= 100.0
    }
}

// src/infrastructure/repositories/postgres_progress.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::library::{
    LastPosition, ProgressPercentage, ReadingProgress, ReadingProgressRepository, UserId,
};
use crate::domain::story::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresReadingProgressRepository {
    pool: PgPool,
}

impl PostgresReadingProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProgressRow {
    user_id: Uuid,
    story_id: String,
    progress_percentage: f64,
    last_position: f64,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProgressRow> for ReadingProgress {
    type Error = DomainError;

    fn try_from(row: ProgressRow) -> Result<Self, Self::Error> {
        Ok(ReadingProgress {
            user_id: UserId::new(row.user_id),
            story_id: StoryId::new(row.story_id)?,
            progress_percentage: ProgressPercentage::new(row.progress_percentage)?,
            last_position: LastPosition::new(row.last_position)?,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ReadingProgressRepository for PostgresReadingProgressRepository {
    async fn upsert(&self, progress: ReadingProgress) -> DomainResult<ReadingProgress> {
        let row = sqlx::query_as::<_, ProgressRow>(
            "INSERT INTO reading_progress
                (user_id, story_id, progress_percentage, last_position, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id, story_id) DO UPDATE SET
                progress_percentage = EXCLUDED.progress_percentage,
                last_position = EXCLUDED.last_position,
                updated_at = EXCLUDED.updated_at
            RETURNING user_id, story_id, progress_percentage, last_position, updated_at",
        )
        .bind(progress.user_id.as_uuid())
        .bind(progress.story_id.as_str())
        .bind(progress.progress_percentage.get())
        .bind(progress.last_position.get())
        .bind(progress.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ReadingProgress::try_from(row)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        story_id: Option<&StoryId>,
    ) -> DomainResult<Vec<ReadingProgress>> {
        let rows = sqlx::query_as::<_, ProgressRow>(
            "SELECT user_id, story_id, progress_percentage, last_position, updated_at
             FROM reading_progress
             WHERE user_id = $1 AND ($2::TEXT IS NULL OR story_id = $2)
             ORDER BY updated_at DESC",
        )
        .bind(user_id.as_uuid())
        .bind(story_id.map(StoryId::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ReadingProgress::try_from).collect()
    }
}

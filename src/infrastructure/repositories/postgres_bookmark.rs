// src/infrastructure/repositories/postgres_bookmark.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::library::{Bookmark, BookmarkRepository, NewBookmark, UserId};
use crate::domain::story::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresBookmarkRepository {
    pool: PgPool,
}

impl PostgresBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookmarkRow {
    id: Uuid,
    user_id: Uuid,
    story_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = DomainError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        Ok(Bookmark {
            id: row.id,
            user_id: UserId::new(row.user_id),
            story_id: StoryId::new(row.story_id)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn insert(&self, bookmark: NewBookmark) -> DomainResult<Bookmark> {
        let NewBookmark {
            user_id,
            story_id,
            created_at,
        } = bookmark;

        let row = sqlx::query_as::<_, BookmarkRow>(
            "INSERT INTO bookmarks (id, user_id, story_id, created_at)
             VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, story_id, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_uuid())
        .bind(story_id.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Bookmark::try_from(row)
    }

    async fn find(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, user_id, story_id, created_at
             FROM bookmarks WHERE user_id = $1 AND story_id = $2",
        )
        .bind(user_id.as_uuid())
        .bind(story_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Bookmark::try_from).transpose()
    }

    async fn delete(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND story_id = $2")
            .bind(user_id.as_uuid())
            .bind(story_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, user_id, story_id, created_at
             FROM bookmarks WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }
}

// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::community::{
    Comment, CommentBody, CommentId, CommentRepository, DisplayName, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::library::UserId;
use crate::domain::story::StoryId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const COMMENT_COLUMNS: &str =
    "id, user_id, story_id, parent_id, content, author_name, upvotes, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    user_id: Uuid,
    story_id: String,
    parent_id: Option<Uuid>,
    content: String,
    author_name: String,
    upvotes: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId(row.id),
            user_id: UserId::new(row.user_id),
            story_id: StoryId::new(row.story_id)?,
            parent_id: row.parent_id.map(CommentId),
            body: CommentBody::new(row.content)?,
            author_name: DisplayName::new(row.author_name)?,
            upvotes: u32::try_from(row.upvotes).unwrap_or(0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let sql = format!(
            "INSERT INTO comments
                (id, user_id, story_id, parent_id, content, author_name, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(comment.user_id.as_uuid())
            .bind(comment.story_id.as_str())
            .bind(comment.parent_id.map(|id| id.0))
            .bind(comment.body.as_str())
            .bind(comment.author_name.as_str())
            .bind(comment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_for_story(&self, story_id: &StoryId) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE story_id = $1 ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(story_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}

use crate::domain::errors::DomainResult;
use crate::domain::library::entity::{Bookmark, NewBookmark, ReadingProgress};
use crate::domain::library::value_objects::UserId;
use crate::domain::story::StoryId;
use async_trait::async_trait;

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the pair is already bookmarked.
    async fn insert(&self, bookmark: NewBookmark) -> DomainResult<Bookmark>;
    async fn find(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<Option<Bookmark>>;
    /// Returns whether a bookmark was removed.
    async fn delete(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<bool>;
    /// Newest first.
    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Bookmark>>;
}

#[async_trait]
pub trait ReadingProgressRepository: Send + Sync {
    async fn upsert(&self, progress: ReadingProgress) -> DomainResult<ReadingProgress>;
    /// Most recently updated first.
    async fn list_for_user(
        &self,
        user_id: UserId,
        story_id: Option<&StoryId>,
    ) -> DomainResult<Vec<ReadingProgress>>;
}

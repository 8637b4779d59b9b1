use crate::domain::community::entity::{Comment, NewComment};
use crate::domain::community::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::story::StoryId;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn list_for_story(&self, story_id: &StoryId) -> DomainResult<Vec<Comment>>;
}

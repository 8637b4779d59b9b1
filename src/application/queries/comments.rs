use crate::{
    application::{
        dto::CommentDto,
        error::ApplicationResult,
        ports::time::Clock,
        validation::{Violations, required},
    },
    domain::{
        community::{CommentRepository, build_threads},
        story::StoryId,
    },
};
use std::sync::Arc;

pub struct ListCommentsQuery {
    pub story_id: Option<String>,
}

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Threads for one story, each comment labelled relative to now.
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<Vec<CommentDto>> {
        let mut violations = Violations::new();
        let Some(story_id) = required(&mut violations, "storyId", query.story_id.as_deref()) else {
            return violations
                .into_result("Story ID is required")
                .map(|()| Vec::new());
        };
        let story_id = StoryId::new(story_id)?;

        let comments = self.repo.list_for_story(&story_id).await?;
        let now = self.clock.now();
        Ok(build_threads(comments)
            .into_iter()
            .map(|thread| CommentDto::from_thread(thread, now))
            .collect())
    }
}

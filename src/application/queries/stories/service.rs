use std::sync::Arc;

use crate::{
    application::{dto::StoryDto, error::ApplicationResult},
    domain::{catalog::distinct_genres, content::ContentSource},
};

pub struct StoryQueryService {
    pub(super) content: Arc<dyn ContentSource>,
}

impl StoryQueryService {
    pub fn new(content: Arc<dyn ContentSource>) -> Self {
        Self { content }
    }

    /// Featured stories, newest first.
    pub async fn featured_stories(&self) -> ApplicationResult<Vec<StoryDto>> {
        let mut featured: Vec<_> = self
            .content
            .fetch_stories()
            .await?
            .into_iter()
            .filter(|story| story.featured)
            .collect();
        featured.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(featured.into_iter().map(StoryDto::summary).collect())
    }

    pub async fn list_genres(&self) -> ApplicationResult<Vec<String>> {
        let stories = self.content.fetch_stories().await?;
        Ok(distinct_genres(&stories))
    }
}

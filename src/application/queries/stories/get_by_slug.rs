use super::StoryQueryService;
use crate::application::{
    dto::StoryDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetStoryBySlugQuery {
    pub slug: String,
}

impl StoryQueryService {
    pub async fn get_story_by_slug(&self, query: GetStoryBySlugQuery) -> ApplicationResult<StoryDto> {
        let slug = query.slug.trim();
        self.content
            .fetch_stories()
            .await?
            .into_iter()
            .find(|story| story.slug.as_str() == slug)
            .map(StoryDto::detail)
            .ok_or_else(|| ApplicationError::not_found("Story not found"))
    }
}

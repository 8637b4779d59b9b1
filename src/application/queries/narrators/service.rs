use std::sync::Arc;

use crate::{
    application::{
        dto::{NarratorDto, NarratorListing, NarratorProfileDto, NarratorSummaryDto, PageDto, StoryDto},
        error::{ApplicationError, ApplicationResult},
        validation::validate_pagination,
    },
    domain::{
        catalog::{PageRequest, SortKey, paginate, sort_stories},
        content::ContentSource,
        narrator::Narrator,
    },
};

pub struct ListNarratorsQuery {
    /// Return every narrator as `{id, name, slug}` without paging.
    pub simple: bool,
    pub page: i64,
    pub limit: i64,
}

pub struct GetNarratorBySlugQuery {
    pub slug: String,
}

pub struct NarratorQueryService {
    content: Arc<dyn ContentSource>,
}

impl NarratorQueryService {
    pub fn new(content: Arc<dyn ContentSource>) -> Self {
        Self { content }
    }

    pub async fn list_narrators(&self, query: ListNarratorsQuery) -> ApplicationResult<NarratorListing> {
        let narrators = self.sorted_narrators().await?;
        if query.simple {
            return Ok(NarratorListing::Simple(
                narrators.into_iter().map(NarratorSummaryDto::from).collect(),
            ));
        }

        let (page, limit) = validate_pagination(query.page, query.limit)?;
        let page = paginate(&narrators, PageRequest::new(page, limit)?);
        Ok(NarratorListing::Paged(PageDto::from_page(page, NarratorDto::from)))
    }

    /// The narrator plus every story they voice, newest first.
    pub async fn get_narrator_by_slug(
        &self,
        query: GetNarratorBySlugQuery,
    ) -> ApplicationResult<NarratorProfileDto> {
        let slug = query.slug.trim();
        let narrator = self
            .content
            .fetch_narrators()
            .await?
            .into_iter()
            .find(|narrator| narrator.slug.as_str() == slug)
            .ok_or_else(|| ApplicationError::not_found("Narrator not found"))?;

        let voiced: Vec<_> = self
            .content
            .fetch_stories()
            .await?
            .into_iter()
            .filter(|story| story.narrator.id == narrator.id)
            .collect();
        let key = SortKey::Newest;
        let stories = sort_stories(&voiced, key, key.default_order())
            .into_iter()
            .map(StoryDto::summary)
            .collect();

        Ok(NarratorProfileDto {
            narrator: narrator.into(),
            stories,
        })
    }

    async fn sorted_narrators(&self) -> ApplicationResult<Vec<Narrator>> {
        let mut narrators = self.content.fetch_narrators().await?;
        narrators.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(narrators)
    }
}

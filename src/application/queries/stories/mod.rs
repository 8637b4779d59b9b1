mod get_by_slug;
mod search;
mod service;

pub use get_by_slug::GetStoryBySlugQuery;
pub use search::SearchStoriesQuery;
pub use service::StoryQueryService;

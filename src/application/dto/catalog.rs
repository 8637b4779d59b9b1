use crate::domain::catalog::{SortKey, SortOrder, StoryFilter};
use crate::domain::story::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PageDto, StoryDto};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationBoundsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Echo of the criteria the catalog actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFiltersDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrator: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationBoundsDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub difficulty: Option<Vec<Difficulty>>,
    #[schema(value_type = String)]
    pub sort_by: SortKey,
    #[schema(value_type = String)]
    pub sort_order: SortOrder,
}

impl AppliedFiltersDto {
    pub fn new(filter: &StoryFilter, sort_by: SortKey, sort_order: SortOrder) -> Self {
        Self {
            search: filter.search.clone(),
            genre: filter.genre.clone(),
            narrator: filter
                .narrator
                .as_ref()
                .map(|ids| ids.iter().map(|id| id.as_str().to_string()).collect()),
            duration: filter.duration.map(|range| DurationBoundsDto {
                min: range.min,
                max: range.max,
            }),
            difficulty: filter.difficulty.clone(),
            sort_by,
            sort_order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorySearchResult {
    pub page: PageDto<StoryDto>,
    pub applied: AppliedFiltersDto,
    pub total_results: u64,
}

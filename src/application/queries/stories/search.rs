use super::StoryQueryService;
use crate::{
    application::{
        dto::{AppliedFiltersDto, PageDto, StoryDto, StorySearchResult},
        error::ApplicationResult,
        validation::{MAX_DURATION_MINUTES, Violations, validate_pagination},
    },
    domain::{
        catalog::{DurationRange, PageRequest, SortKey, SortOrder, StoryFilter, query_catalog},
        narrator::NarratorId,
        story::Difficulty,
    },
};
use tracing::debug;

/// Raw catalog criteria as received from a caller. Every field is optional;
/// an empty list means "no constraint".
#[derive(Debug, Clone)]
pub struct SearchStoriesQuery {
    pub search: Option<String>,
    pub genre: Vec<String>,
    pub narrator: Vec<String>,
    pub min_duration: Option<i64>,
    pub max_duration: Option<i64>,
    pub difficulty: Vec<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl Default for SearchStoriesQuery {
    fn default() -> Self {
        Self {
            search: None,
            genre: Vec::new(),
            narrator: Vec::new(),
            min_duration: None,
            max_duration: None,
            difficulty: Vec::new(),
            sort_by: None,
            sort_order: None,
            page: 1,
            limit: crate::application::validation::DEFAULT_PAGE_LIMIT,
        }
    }
}

struct ValidatedCriteria {
    filter: StoryFilter,
    sort_by: SortKey,
    sort_order: SortOrder,
}

impl SearchStoriesQuery {
    fn validate(&self) -> ApplicationResult<(PageRequest, ValidatedCriteria)> {
        let (page, limit) = validate_pagination(self.page, self.limit)?;
        let request = PageRequest::new(page, limit)?;

        let mut violations = Violations::new();
        let difficulty: Vec<Difficulty> = violations.parse_each("difficulty", &self.difficulty);
        let narrator: Vec<NarratorId> = violations.parse_each("narrator", &self.narrator);

        let min = self.duration_bound(&mut violations, "minDuration", self.min_duration);
        let max = self.duration_bound(&mut violations, "maxDuration", self.max_duration);

        let sort_by = match self.sort_by.as_deref().map(str::parse::<SortKey>) {
            None => SortKey::default(),
            Some(Ok(key)) => key,
            Some(Err(err)) => {
                violations.push("sortBy", err.to_string());
                SortKey::default()
            }
        };
        let sort_order = match self.sort_order.as_deref().map(str::parse::<SortOrder>) {
            None => sort_by.default_order(),
            Some(Ok(order)) => order,
            Some(Err(err)) => {
                violations.push("sortOrder", err.to_string());
                sort_by.default_order()
            }
        };

        violations.into_result("Invalid filter parameters")?;

        let filter = StoryFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            genre: non_empty(self.genre.clone()),
            narrator: non_empty(narrator),
            duration: (min.is_some() || max.is_some()).then_some(DurationRange { min, max }),
            difficulty: non_empty(difficulty),
        };

        Ok((
            request,
            ValidatedCriteria {
                filter,
                sort_by,
                sort_order,
            },
        ))
    }

    fn duration_bound(&self, violations: &mut Violations, field: &str, value: Option<i64>) -> Option<u32> {
        let value = value?;
        if !(0..=MAX_DURATION_MINUTES).contains(&value) {
            violations.push(field, "must be between 0 and 300");
            return None;
        }
        u32::try_from(value).ok()
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    (!values.is_empty()).then_some(values)
}

impl StoryQueryService {
    pub async fn search_stories(&self, query: SearchStoriesQuery) -> ApplicationResult<StorySearchResult> {
        let (request, criteria) = query.validate()?;
        let stories = self.content.fetch_stories().await?;

        let page = query_catalog(
            &stories,
            &criteria.filter,
            criteria.sort_by,
            criteria.sort_order,
            request,
        );
        debug!(
            total = page.pagination.total,
            page = page.pagination.page,
            sort_by = %criteria.sort_by,
            sort_order = %criteria.sort_order,
            "catalog query"
        );

        let total_results = page.pagination.total;
        Ok(StorySearchResult {
            page: PageDto::from_page(page, StoryDto::summary),
            applied: AppliedFiltersDto::new(&criteria.filter, criteria.sort_by, criteria.sort_order),
            total_results,
        })
    }
}

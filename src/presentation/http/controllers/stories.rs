// src/presentation/http/controllers/stories.rs
use crate::application::{
    dto::{AppliedFiltersDto, PaginationDto, StoryDto, StorySearchResult},
    queries::stories::{GetStoryBySlugQuery, SearchStoriesQuery},
    validation::{DEFAULT_PAGE_LIMIT, Violations},
};
use crate::presentation::http::controllers::int_param;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryPairs};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DurationRequest {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryFiltersRequest {
    pub search: Option<String>,
    pub genre: Vec<String>,
    pub narrator: Vec<String>,
    pub duration: Option<DurationRequest>,
    #[schema(example = json!(["beginner"]))]
    pub difficulty: Vec<String>,
    #[schema(example = "newest")]
    pub sort_by: Option<String>,
    #[schema(example = "desc")]
    pub sort_order: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StorySearchRequest {
    pub filters: StoryFiltersRequest,
    pub pagination: PaginationRequest,
}

impl From<StorySearchRequest> for SearchStoriesQuery {
    fn from(request: StorySearchRequest) -> Self {
        let StorySearchRequest {
            filters,
            pagination,
        } = request;
        let duration = filters.duration.unwrap_or_default();
        Self {
            search: filters.search,
            genre: filters.genre,
            narrator: filters.narrator,
            min_duration: duration.min,
            max_duration: duration.max,
            difficulty: filters.difficulty,
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
            page: pagination.page,
            limit: pagination.limit,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiltersSummary {
    pub applied: AppliedFiltersDto,
    pub total_results: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryListResponse {
    pub success: bool,
    pub data: Vec<StoryDto>,
    pub pagination: PaginationDto,
    pub filters: FiltersSummary,
}

impl From<StorySearchResult> for StoryListResponse {
    fn from(result: StorySearchResult) -> Self {
        Self {
            success: true,
            data: result.page.data,
            pagination: result.page.pagination,
            filters: FiltersSummary {
                applied: result.applied,
                total_results: result.total_results,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoryResponse {
    pub success: bool,
    pub data: StoryDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StoryCollectionResponse {
    pub success: bool,
    pub data: Vec<StoryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenreListResponse {
    pub success: bool,
    pub data: Vec<String>,
}

fn query_from_params(params: &QueryPairs) -> HttpResult<SearchStoriesQuery> {
    let mut paging = Violations::new();
    let page = int_param(params, "page", Some(1), &mut paging).unwrap_or(1);
    let limit = int_param(params, "limit", Some(DEFAULT_PAGE_LIMIT), &mut paging)
        .unwrap_or(DEFAULT_PAGE_LIMIT);
    paging.into_result("Invalid pagination parameters").into_http()?;

    let mut filters = Violations::new();
    let min_duration = int_param(params, "minDuration", None, &mut filters);
    let max_duration = int_param(params, "maxDuration", None, &mut filters);
    filters.into_result("Invalid filter parameters").into_http()?;

    Ok(SearchStoriesQuery {
        search: params.first("search").map(str::to_string),
        genre: params.all("genre"),
        narrator: params.all("narrator"),
        min_duration,
        max_duration,
        difficulty: params.all("difficulty"),
        sort_by: params.first("sortBy").map(str::to_string),
        sort_order: params.first("sortOrder").map(str::to_string),
        page,
        limit,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/stories",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive match on title, author or narrator name"),
        ("genre" = Option<Vec<String>>, Query, description = "Repeatable; any match"),
        ("narrator" = Option<Vec<String>>, Query, description = "Narrator id, repeatable"),
        ("difficulty" = Option<Vec<String>>, Query, description = "beginner | intermediate | advanced, repeatable"),
        ("minDuration" = Option<i64>, Query, description = "Minutes, inclusive"),
        ("maxDuration" = Option<i64>, Query, description = "Minutes, inclusive, at most 300"),
        ("sortBy" = Option<String>, Query, description = "newest | oldest | popular | rating | duration | title"),
        ("sortOrder" = Option<String>, Query, description = "asc | desc"),
        ("page" = Option<i64>, Query, description = "1-indexed, defaults to 1"),
        ("limit" = Option<i64>, Query, description = "1..=100, defaults to 20")
    ),
    responses(
        (status = 200, description = "Filtered, sorted page of stories.", body = StoryListResponse),
        (status = 400, description = "Invalid filter or pagination parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Stories"
)]
pub async fn list_stories(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<StoryListResponse>> {
    let query = query_from_params(&params)?;
    state
        .services
        .stories
        .search_stories(query)
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/stories/search",
    request_body = StorySearchRequest,
    responses(
        (status = 200, description = "Filtered, sorted page of stories.", body = StoryListResponse),
        (status = 400, description = "Invalid filter or pagination parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Stories"
)]
pub async fn search_stories(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<StorySearchRequest>,
) -> HttpResult<Json<StoryListResponse>> {
    state
        .services
        .stories
        .search_stories(payload.into())
        .await
        .into_http()
        .map(|result| Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/stories/featured",
    responses(
        (status = 200, description = "Featured stories, newest first.", body = StoryCollectionResponse)
    ),
    tag = "Stories"
)]
pub async fn featured_stories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<StoryCollectionResponse>> {
    let data = state.services.stories.featured_stories().await.into_http()?;
    Ok(Json(StoryCollectionResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/stories/{slug}",
    params(("slug" = String, Path, description = "Story slug")),
    responses(
        (status = 200, description = "Full story record.", body = StoryResponse),
        (status = 404, description = "No story with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Stories"
)]
pub async fn get_story_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<StoryResponse>> {
    let data = state
        .services
        .stories
        .get_story_by_slug(GetStoryBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(StoryResponse {
        success: true,
        data,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "Sorted distinct genres across the catalog.", body = GenreListResponse)
    ),
    tag = "Stories"
)]
pub async fn list_genres(Extension(state): Extension<HttpState>) -> HttpResult<Json<GenreListResponse>> {
    let data = state.services.stories.list_genres().await.into_http()?;
    Ok(Json(GenreListResponse {
        success: true,
        data,
    }))
}

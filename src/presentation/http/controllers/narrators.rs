// src/presentation/http/controllers/narrators.rs
use crate::application::{
    dto::{NarratorDto, NarratorListing, NarratorProfileDto, NarratorSummaryDto, PaginationDto},
    queries::narrators::{GetNarratorBySlugQuery, ListNarratorsQuery},
    validation::{DEFAULT_PAGE_LIMIT, Violations},
};
use crate::presentation::http::controllers::{flag_param, int_param};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::QueryPairs;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NarratorItems {
    Full(Vec<NarratorDto>),
    Simple(Vec<NarratorSummaryDto>),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NarratorListResponse {
    pub success: bool,
    pub data: NarratorItems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

impl From<NarratorListing> for NarratorListResponse {
    fn from(listing: NarratorListing) -> Self {
        match listing {
            NarratorListing::Simple(items) => Self {
                success: true,
                data: NarratorItems::Simple(items),
                pagination: None,
            },
            NarratorListing::Paged(page) => Self {
                success: true,
                data: NarratorItems::Full(page.data),
                pagination: Some(page.pagination),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NarratorProfileResponse {
    pub success: bool,
    pub data: NarratorProfileDto,
}

#[utoipa::path(
    get,
    path = "/api/v1/narrators",
    params(
        ("simple" = Option<bool>, Query, description = "Return every narrator as id, name and slug without paging"),
        ("page" = Option<i64>, Query, description = "1-indexed, defaults to 1"),
        ("limit" = Option<i64>, Query, description = "1..=100, defaults to 20")
    ),
    responses(
        (status = 200, description = "Narrators sorted by name.", body = NarratorListResponse),
        (status = 400, description = "Invalid pagination parameters.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Narrators"
)]
pub async fn list_narrators(
    Extension(state): Extension<HttpState>,
    params: QueryPairs,
) -> HttpResult<Json<NarratorListResponse>> {
    let mut paging = Violations::new();
    let page = int_param(&params, "page", Some(1), &mut paging).unwrap_or(1);
    let limit = int_param(&params, "limit", Some(DEFAULT_PAGE_LIMIT), &mut paging)
        .unwrap_or(DEFAULT_PAGE_LIMIT);
    paging.into_result("Invalid pagination parameters").into_http()?;

    let query = ListNarratorsQuery {
        simple: flag_param(&params, "simple"),
        page,
        limit,
    };
    state
        .services
        .narrators
        .list_narrators(query)
        .await
        .into_http()
        .map(|listing| Json(listing.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/narrators/{slug}",
    params(("slug" = String, Path, description = "Narrator slug")),
    responses(
        (status = 200, description = "Narrator with the stories they voice.", body = NarratorProfileResponse),
        (status = 404, description = "No narrator with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Narrators"
)]
pub async fn get_narrator_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<NarratorProfileResponse>> {
    let data = state
        .services
        .narrators
        .get_narrator_by_slug(GetNarratorBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(NarratorProfileResponse {
        success: true,
        data,
    }))
}

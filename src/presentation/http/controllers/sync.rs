// src/presentation/http/controllers/sync.rs
use crate::application::dto::SyncReportDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    pub updated: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<SyncReportDto> for SyncResponse {
    fn from(report: SyncReportDto) -> Self {
        let message = if report.success {
            format!("Successfully synchronized {} items", report.updated)
        } else {
            "Synchronization completed with errors".to_string()
        };
        Self {
            success: report.success,
            message,
            updated: report.updated,
            errors: report.errors,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/sync",
    responses(
        (status = 200, description = "Content reloaded and consistent.", body = SyncResponse),
        (status = 207, description = "Content reloaded with consistency issues.", body = SyncResponse),
        (status = 503, description = "Content source unreachable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "System"
)]
pub async fn sync_content(
    Extension(state): Extension<HttpState>,
) -> HttpResult<(StatusCode, Json<SyncResponse>)> {
    let report = state.services.content_sync.sync().await.into_http()?;
    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    Ok((status, Json(report.into())))
}

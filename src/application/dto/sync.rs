use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncReportDto {
    pub success: bool,
    pub updated: usize,
    pub errors: Vec<String>,
}

use crate::{
    application::{dto::SyncReportDto, error::ApplicationResult},
    domain::content::{ContentSource, consistency_issues},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Forces a reload of CMS content and reports what came back.
pub struct ContentSyncService {
    content: Arc<dyn ContentSource>,
}

impl ContentSyncService {
    pub fn new(content: Arc<dyn ContentSource>) -> Self {
        Self { content }
    }

    pub async fn sync(&self) -> ApplicationResult<SyncReportDto> {
        self.content.refresh().await?;
        let stories = self.content.fetch_stories().await?;
        let narrators = self.content.fetch_narrators().await?;

        let errors = consistency_issues(&stories, &narrators);
        let updated = stories.len() + narrators.len();
        if errors.is_empty() {
            info!(stories = stories.len(), narrators = narrators.len(), "content synced");
        } else {
            warn!(issues = errors.len(), "content synced with consistency issues");
        }

        Ok(SyncReportDto {
            success: errors.is_empty(),
            updated,
            errors,
        })
    }
}

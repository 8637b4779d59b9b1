use super::{ContentDocument, ContentError};
use crate::application::ports::util::SlugGenerator;
use crate::domain::content::ContentSource;
use crate::domain::errors::DomainResult;
use crate::domain::narrator::Narrator;
use crate::domain::story::Story;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Reads `{ "stories": [...], "narrators": [...] }` from disk on every
/// fetch. Meant for local development; wrap it in
/// [`CachedContentSource`](super::CachedContentSource) to avoid re-reading.
pub struct JsonFileContentSource {
    path: PathBuf,
    slugger: Arc<dyn SlugGenerator>,
}

impl JsonFileContentSource {
    pub fn new(path: impl Into<PathBuf>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self {
            path: path.into(),
            slugger,
        }
    }

    async fn load(&self) -> Result<ContentDocument, ContentError> {
        let raw = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&raw).map_err(|e| ContentError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContentSource for JsonFileContentSource {
    async fn fetch_stories(&self) -> DomainResult<Vec<Story>> {
        Ok(self.load().await?.stories(self.slugger.as_ref())?)
    }

    async fn fetch_narrators(&self) -> DomainResult<Vec<Narrator>> {
        Ok(self.load().await?.narrators(self.slugger.as_ref())?)
    }
}

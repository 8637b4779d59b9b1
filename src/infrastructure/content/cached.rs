use crate::domain::content::ContentSource;
use crate::domain::errors::DomainResult;
use crate::domain::narrator::Narrator;
use crate::domain::story::Story;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

struct Snapshot<T> {
    items: Vec<T>,
    fetched_at: Instant,
}

/// Keeps the last fetched collections for `ttl`. Each collection expires on
/// its own; `refresh` drops both.
pub struct CachedContentSource {
    inner: Arc<dyn ContentSource>,
    ttl: Duration,
    stories: RwLock<Option<Snapshot<Story>>>,
    narrators: RwLock<Option<Snapshot<Narrator>>>,
}

impl CachedContentSource {
    pub fn new(inner: Arc<dyn ContentSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            stories: RwLock::new(None),
            narrators: RwLock::new(None),
        }
    }

    fn fresh<T: Clone>(&self, slot: &Option<Snapshot<T>>) -> Option<Vec<T>> {
        slot.as_ref()
            .filter(|snapshot| snapshot.fetched_at.elapsed() < self.ttl)
            .map(|snapshot| snapshot.items.clone())
    }
}

#[async_trait]
impl ContentSource for CachedContentSource {
    async fn fetch_stories(&self) -> DomainResult<Vec<Story>> {
        if let Some(items) = self.fresh(&*self.stories.read().await) {
            return Ok(items);
        }

        let mut slot = self.stories.write().await;
        if let Some(items) = self.fresh(&slot) {
            return Ok(items);
        }
        let items = self.inner.fetch_stories().await?;
        debug!(count = items.len(), "story cache refilled");
        *slot = Some(Snapshot {
            items: items.clone(),
            fetched_at: Instant::now(),
        });
        Ok(items)
    }

    async fn fetch_narrators(&self) -> DomainResult<Vec<Narrator>> {
        if let Some(items) = self.fresh(&*self.narrators.read().await) {
            return Ok(items);
        }

        let mut slot = self.narrators.write().await;
        if let Some(items) = self.fresh(&slot) {
            return Ok(items);
        }
        let items = self.inner.fetch_narrators().await?;
        debug!(count = items.len(), "narrator cache refilled");
        *slot = Some(Snapshot {
            items: items.clone(),
            fetched_at: Instant::now(),
        });
        Ok(items)
    }

    async fn refresh(&self) -> DomainResult<()> {
        *self.stories.write().await = None;
        *self.narrators.write().await = None;
        self.inner.refresh().await
    }
}

//! Headless CMS client. Both collections are fetched with one GROQ query
//! each; asset references are flattened to plain URLs server-side so the
//! response decodes straight into [`StoryRecord`] / [`NarratorRecord`].

use super::{ContentError, NarratorRecord, StoryRecord};
use crate::application::ports::util::SlugGenerator;
use crate::domain::content::ContentSource;
use crate::domain::errors::DomainResult;
use crate::domain::narrator::Narrator;
use crate::domain::story::Story;
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("fable_foundry/", env!("CARGO_PKG_VERSION"));

const NARRATOR_PROJECTION: &str = r#"{
    _id, _createdAt, _updatedAt, name, "slug": slug.current, bio,
    "avatar": {
      "idle": avatar.idle.asset->url,
      "speaking": avatar.speaking.asset->url,
      "introduction": avatar.introduction.asset->url
    },
    "voiceProfile": {
      "audioSamples": voiceProfile.audioSamples[].asset->url,
      "characteristics": voiceProfile.characteristics
    },
    specialties, socialLinks
  }"#;

fn stories_query() -> String {
    format!(
        r#"*[_type == "story" && status == "published"] | order(publishedAt desc) {{
  _id, title, "slug": slug.current, author, excerpt, content,
  "coverImage": coverImage{{
    "url": asset->url, alt,
    "width": asset->metadata.dimensions.width,
    "height": asset->metadata.dimensions.height
  }},
  "narrator": narrator->{NARRATOR_PROJECTION},
  metadata,
  "audio": audio{{ "fullNarration": fullNarration.asset->url, chapterBreaks }},
  publishedAt, featured
}}"#
    )
}

fn narrators_query() -> String {
    format!(r#"*[_type == "narrator"] | order(name asc) {NARRATOR_PROJECTION}"#)
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
    pub fetch_attempts: u32,
    pub base_delay: Duration,
}

impl SanityConfig {
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{host}.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Wait before retry number `attempt` (1-based): base, 2x base, 4x base...
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

pub struct SanityContentSource {
    http_client: reqwest::Client,
    config: SanityConfig,
    slugger: Arc<dyn SlugGenerator>,
}

impl SanityContentSource {
    pub fn new(config: SanityConfig, slugger: Arc<dyn SlugGenerator>) -> Result<Self, ContentError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ContentError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
            slugger,
        })
    }

    async fn query_once<T: DeserializeOwned>(&self, groq: &str) -> Result<T, ContentError> {
        let mut request = self
            .http_client
            .get(self.config.query_url())
            .query(&[("query", groq)]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<QueryResponse<T>>()
            .await
            .map(|payload| payload.result)
            .map_err(|e| ContentError::Decode(e.to_string()))
    }

    async fn query<T: DeserializeOwned>(&self, groq: &str) -> Result<T, ContentError> {
        let attempts = self.config.fetch_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.query_once(groq).await {
                Ok(result) => return Ok(result),
                Err(err) if attempt < attempts && err.is_retryable() => {
                    let wait = self.config.backoff(attempt);
                    warn!(attempt, ?wait, error = %err, "CMS query failed, retrying");
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl ContentSource for SanityContentSource {
    async fn fetch_stories(&self) -> DomainResult<Vec<Story>> {
        let records: Vec<StoryRecord> = self.query(&stories_query()).await?;
        debug!(count = records.len(), "fetched stories from CMS");
        let stories = records
            .into_iter()
            .map(|record| record.into_domain(self.slugger.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(stories)
    }

    async fn fetch_narrators(&self) -> DomainResult<Vec<Narrator>> {
        let records: Vec<NarratorRecord> = self.query(&narrators_query()).await?;
        debug!(count = records.len(), "fetched narrators from CMS");
        let narrators = records
            .into_iter()
            .map(|record| record.into_domain(self.slugger.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(narrators)
    }
}

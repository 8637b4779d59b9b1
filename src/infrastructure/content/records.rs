// Wire shapes shared by the CMS response and the offline JSON document.
use super::ContentError;
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainError;
use crate::domain::narrator::{
    Narrator, NarratorAvatar, NarratorId, NarratorSlug, SocialLinks, VoiceProfile,
};
use crate::domain::story::{
    CoverImage, Difficulty, DurationMinutes, Genres, Story, StoryAudio, StoryId, StoryMetadata,
    StorySlug,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub stories: Vec<StoryRecord>,
    #[serde(default)]
    pub narrators: Vec<NarratorRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarRecord {
    pub idle: Option<String>,
    pub speaking: Option<String>,
    pub introduction: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileRecord {
    #[serde(default)]
    pub audio_samples: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinksRecord {
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarratorRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: AvatarRecord,
    #[serde(default)]
    pub voice_profile: VoiceProfileRecord,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinksRecord,
    #[serde(rename = "_createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub duration: u32,
    #[serde(default)]
    pub genre: Vec<String>,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRecord {
    pub full_narration: Option<String>,
    #[serde(default)]
    pub chapter_breaks: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub url: Option<String>,
    #[serde(default)]
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub author: String,
    pub excerpt: Option<String>,
    pub narrator: NarratorRecord,
    pub metadata: MetadataRecord,
    pub audio: Option<AudioRecord>,
    pub cover_image: Option<ImageRecord>,
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub featured: bool,
    pub published_at: DateTime<Utc>,
}

fn record_err(id: &str) -> impl FnOnce(DomainError) -> ContentError + '_ {
    move |source| ContentError::Record {
        id: id.to_string(),
        source,
    }
}

fn slug_or_title(slug: Option<String>, title: &str, slugger: &dyn SlugGenerator) -> String {
    slug.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| slugger.slugify(title))
}

impl NarratorRecord {
    pub fn into_domain(self, slugger: &dyn SlugGenerator) -> Result<Narrator, ContentError> {
        let slug = slug_or_title(self.slug, &self.name, slugger);
        Ok(Narrator {
            id: NarratorId::new(self.id.clone()).map_err(record_err(&self.id))?,
            slug: NarratorSlug::new(slug).map_err(record_err(&self.id))?,
            name: self.name,
            bio: self.bio,
            avatar: NarratorAvatar {
                idle: self.avatar.idle,
                speaking: self.avatar.speaking,
                introduction: self.avatar.introduction,
            },
            voice_profile: VoiceProfile {
                audio_samples: self.voice_profile.audio_samples,
                characteristics: self.voice_profile.characteristics,
            },
            specialties: self.specialties,
            social_links: SocialLinks {
                twitter: self.social_links.twitter,
                website: self.social_links.website,
                instagram: self.social_links.instagram,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl StoryRecord {
    pub fn into_domain(self, slugger: &dyn SlugGenerator) -> Result<Story, ContentError> {
        let id = self.id;
        let invalid = |source: DomainError| ContentError::Record {
            id: id.clone(),
            source,
        };

        let metadata = StoryMetadata {
            genre: Genres::new(self.metadata.genre).map_err(invalid)?,
            difficulty: self
                .metadata
                .difficulty
                .parse::<Difficulty>()
                .map_err(invalid)?,
            duration: DurationMinutes::new(self.metadata.duration).map_err(invalid)?,
            tags: self.metadata.tags,
            is_new: self.metadata.is_new,
            rating: self.metadata.rating,
            rating_count: self.metadata.rating_count,
        };

        let audio = self.audio.and_then(|audio| {
            audio.full_narration.map(|url| StoryAudio {
                full_narration: url,
                chapter_breaks: audio.chapter_breaks,
            })
        });
        let cover_image = self.cover_image.and_then(|image| {
            image.url.map(|url| CoverImage {
                url,
                alt: image.alt,
                width: image.width,
                height: image.height,
            })
        });

        Ok(Story {
            slug: StorySlug::new(slug_or_title(self.slug, &self.title, slugger)).map_err(invalid)?,
            narrator: self.narrator.into_domain(slugger)?,
            id: StoryId::new(id.clone()).map_err(invalid)?,
            title: self.title,
            author: self.author,
            excerpt: self.excerpt,
            metadata,
            audio,
            cover_image,
            content: self.content,
            featured: self.featured,
            published_at: self.published_at,
        })
    }
}

impl ContentDocument {
    pub fn stories(self, slugger: &dyn SlugGenerator) -> Result<Vec<Story>, ContentError> {
        self.stories
            .into_iter()
            .map(|record| record.into_domain(slugger))
            .collect()
    }

    pub fn narrators(self, slugger: &dyn SlugGenerator) -> Result<Vec<Narrator>, ContentError> {
        self.narrators
            .into_iter()
            .map(|record| record.into_domain(slugger))
            .collect()
    }
}

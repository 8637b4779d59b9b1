use crate::application::formatting::{format_date, format_duration, truncate_text};
use crate::domain::narrator::Narrator;
use crate::domain::story::{CoverImage, Difficulty, Story, StoryAudio};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PageDto, serde_time};

const EXCERPT_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NarratorAvatarDto {
    pub idle: Option<String>,
    pub speaking: Option<String>,
    pub introduction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileDto {
    pub audio_samples: Vec<String>,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NarratorDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub bio: String,
    pub avatar: NarratorAvatarDto,
    pub voice_profile: VoiceProfileDto,
    pub specialties: Vec<String>,
    pub social_links: SocialLinksDto,
}

impl From<Narrator> for NarratorDto {
    fn from(narrator: Narrator) -> Self {
        Self {
            id: narrator.id.into(),
            name: narrator.name,
            slug: narrator.slug.to_string(),
            bio: narrator.bio,
            avatar: NarratorAvatarDto {
                idle: narrator.avatar.idle,
                speaking: narrator.avatar.speaking,
                introduction: narrator.avatar.introduction,
            },
            voice_profile: VoiceProfileDto {
                audio_samples: narrator.voice_profile.audio_samples,
                characteristics: narrator.voice_profile.characteristics,
            },
            specialties: narrator.specialties,
            social_links: SocialLinksDto {
                twitter: narrator.social_links.twitter,
                website: narrator.social_links.website,
                instagram: narrator.social_links.instagram,
            },
        }
    }
}

/// Name-and-slug view used by pickers and the `simple` narrator listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NarratorSummaryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl From<Narrator> for NarratorSummaryDto {
    fn from(narrator: Narrator) -> Self {
        Self {
            id: narrator.id.into(),
            name: narrator.name,
            slug: narrator.slug.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryMetadataDto {
    pub duration: u32,
    pub duration_label: String,
    pub genre: Vec<String>,
    #[schema(value_type = String, example = "beginner")]
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub is_new: bool,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryAudioDto {
    pub full_narration: String,
    pub chapter_breaks: Vec<u32>,
}

impl From<StoryAudio> for StoryAudioDto {
    fn from(audio: StoryAudio) -> Self {
        Self {
            full_narration: audio.full_narration,
            chapter_breaks: audio.chapter_breaks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverImageDto {
    pub url: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl From<CoverImage> for CoverImageDto {
    fn from(image: CoverImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
            width: image.width,
            height: image.height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub narrator: NarratorDto,
    pub metadata: StoryMetadataDto,
    pub audio: Option<StoryAudioDto>,
    pub cover_image: Option<CoverImageDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub content: Option<serde_json::Value>,
    pub featured: bool,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub published_at: DateTime<Utc>,
    pub published_label: String,
}

impl StoryDto {
    /// Full record including the story body.
    pub fn detail(story: Story) -> Self {
        Self::build(story, true)
    }

    /// Listing view: no body and a shortened excerpt.
    pub fn summary(story: Story) -> Self {
        Self::build(story, false)
    }

    fn build(story: Story, with_content: bool) -> Self {
        let duration = story.duration_minutes();
        let excerpt = if with_content {
            story.excerpt
        } else {
            story
                .excerpt
                .map(|text| truncate_text(&text, EXCERPT_PREVIEW_CHARS))
        };

        Self {
            id: story.id.into(),
            title: story.title,
            author: story.author,
            slug: story.slug.to_string(),
            excerpt,
            narrator: story.narrator.into(),
            metadata: StoryMetadataDto {
                duration,
                duration_label: format_duration(duration),
                genre: story.metadata.genre.as_slice().to_vec(),
                difficulty: story.metadata.difficulty,
                tags: story.metadata.tags,
                is_new: story.metadata.is_new,
                rating: story.metadata.rating,
                rating_count: story.metadata.rating_count,
            },
            audio: story.audio.map(Into::into),
            cover_image: story.cover_image.map(Into::into),
            content: if with_content { story.content } else { None },
            featured: story.featured,
            published_at: story.published_at,
            published_label: format_date(story.published_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NarratorProfileDto {
    pub narrator: NarratorDto,
    pub stories: Vec<StoryDto>,
}

#[derive(Debug, Clone)]
pub enum NarratorListing {
    Simple(Vec<NarratorSummaryDto>),
    Paged(PageDto<NarratorDto>),
}

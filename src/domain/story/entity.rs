// src/domain/story/entity.rs
use crate::domain::narrator::Narrator;
use crate::domain::story::value_objects::{Difficulty, DurationMinutes, Genres, StoryId, StorySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct StoryMetadata {
    pub genre: Genres,
    pub difficulty: Difficulty,
    pub duration: DurationMinutes,
    pub tags: Vec<String>,
    pub is_new: bool,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryAudio {
    pub full_narration: String,
    /// Chapter start offsets in seconds.
    pub chapter_breaks: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub url: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A narrated story as delivered by the content source. Read-only from the
/// catalog's point of view.
#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub author: String,
    pub slug: StorySlug,
    pub excerpt: Option<String>,
    pub narrator: Narrator,
    pub metadata: StoryMetadata,
    pub audio: Option<StoryAudio>,
    pub cover_image: Option<CoverImage>,
    /// Portable-text blocks, passed through untouched.
    pub content: Option<serde_json::Value>,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
}

impl Story {
    pub fn duration_minutes(&self) -> u32 {
        self.metadata.duration.get()
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.metadata.rating.unwrap_or(0.0)
    }

    pub fn rating_count_or_zero(&self) -> u32 {
        self.metadata.rating_count.unwrap_or(0)
    }
}

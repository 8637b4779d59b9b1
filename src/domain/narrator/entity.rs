// src/domain/narrator/entity.rs
use crate::domain::narrator::value_objects::{NarratorId, NarratorSlug};
use chrono::{DateTime, Utc};

/// Image set shown while a narrator is idle, speaking, or introducing a story.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarratorAvatar {
    pub idle: Option<String>,
    pub speaking: Option<String>,
    pub introduction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceProfile {
    pub audio_samples: Vec<String>,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
}

/// A voice persona. Stories embed the narrator record directly, so the
/// catalog pipeline never performs a separate lookup.
#[derive(Debug, Clone)]
pub struct Narrator {
    pub id: NarratorId,
    pub name: String,
    pub slug: NarratorSlug,
    pub bio: String,
    pub avatar: NarratorAvatar,
    pub voice_profile: VoiceProfile,
    pub specialties: Vec<String>,
    pub social_links: SocialLinks,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Narrator {
    pub fn has_complete_avatar(&self) -> bool {
        self.avatar.idle.is_some() && self.avatar.speaking.is_some()
    }
}

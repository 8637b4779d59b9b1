// Story builders shared by the catalog unit tests.
use crate::domain::narrator::{Narrator, NarratorAvatar, NarratorId, NarratorSlug, SocialLinks, VoiceProfile};
use crate::domain::story::{
    Difficulty, DurationMinutes, Genres, Story, StoryId, StoryMetadata, StorySlug,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn narrator(id: &str, name: &str) -> Narrator {
    Narrator {
        id: NarratorId::new(id).unwrap(),
        name: name.into(),
        slug: NarratorSlug::new(id).unwrap(),
        bio: format!("{name} reads stories."),
        avatar: NarratorAvatar {
            idle: Some(format!("https://cdn.example.com/{id}/idle.png")),
            speaking: Some(format!("https://cdn.example.com/{id}/speaking.png")),
            introduction: None,
        },
        voice_profile: VoiceProfile::default(),
        specialties: vec![],
        social_links: SocialLinks::default(),
        created_at: None,
        updated_at: None,
    }
}

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, n, 12, 0, 0).unwrap()
}

pub struct StoryBuilder {
    id: String,
    title: String,
    author: String,
    narrator: Narrator,
    genres: Vec<String>,
    difficulty: Difficulty,
    duration: u32,
    rating: Option<f64>,
    rating_count: Option<u32>,
    published_at: DateTime<Utc>,
}

impl StoryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            title: format!("Story {id}"),
            author: "Anonymous".into(),
            narrator: narrator("n1", "Narrator One"),
            genres: vec!["Fantasy".into()],
            difficulty: Difficulty::Beginner,
            duration: 30,
            rating: None,
            rating_count: None,
            published_at: day(1),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.into();
        self
    }

    pub fn narrator(mut self, narrator: Narrator) -> Self {
        self.narrator = narrator;
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn rating_count(mut self, count: u32) -> Self {
        self.rating_count = Some(count);
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = at;
        self
    }

    pub fn build(self) -> Story {
        Story {
            slug: StorySlug::new(format!("story-{}", self.id)).unwrap(),
            id: StoryId::new(self.id).unwrap(),
            title: self.title,
            author: self.author,
            excerpt: None,
            narrator: self.narrator,
            metadata: StoryMetadata {
                genre: Genres::new(self.genres).unwrap(),
                difficulty: self.difficulty,
                duration: DurationMinutes::new(self.duration).unwrap(),
                tags: vec![],
                is_new: false,
                rating: self.rating,
                rating_count: self.rating_count,
            },
            audio: None,
            cover_image: None,
            content: None,
            featured: false,
            published_at: self.published_at,
        }
    }
}

pub fn ids(stories: &[Story]) -> Vec<&str> {
    stories.iter().map(|s| s.id.as_str()).collect()
}

// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use fable_foundry::domain::narrator::{
    Narrator, NarratorAvatar, NarratorId, NarratorSlug, SocialLinks, VoiceProfile,
};
use fable_foundry::domain::story::{
    CoverImage, Difficulty, DurationMinutes, Genres, Story, StoryAudio, StoryId, StoryMetadata,
    StorySlug,
};

pub fn narrator(id: &str, name: &str) -> Narrator {
    Narrator {
        id: NarratorId::new(id).unwrap(),
        name: name.into(),
        slug: NarratorSlug::new(id).unwrap(),
        bio: format!("{name} has been reading aloud for years."),
        avatar: NarratorAvatar {
            idle: Some(format!("https://cdn.example.com/{id}/idle.png")),
            speaking: Some(format!("https://cdn.example.com/{id}/speaking.gif")),
            introduction: None,
        },
        voice_profile: VoiceProfile::default(),
        specialties: vec!["fantasy".into()],
        social_links: SocialLinks::default(),
        created_at: None,
        updated_at: None,
    }
}

pub fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, n, 9, 0, 0).unwrap()
}

pub struct StoryBuilder {
    id: String,
    title: String,
    author: String,
    excerpt: Option<String>,
    narrator: Narrator,
    genres: Vec<String>,
    difficulty: Difficulty,
    duration: u32,
    tags: Vec<String>,
    rating: Option<f64>,
    rating_count: Option<u32>,
    featured: bool,
    with_audio: bool,
    with_cover: bool,
    published_at: DateTime<Utc>,
}

impl StoryBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            id: format!("story-{slug}"),
            title: slug.replace('-', " "),
            author: "E. Marlow".into(),
            excerpt: Some(format!("An excerpt from {slug}.")),
            narrator: narrator("ava", "Ava Stone"),
            genres: vec!["Fantasy".into()],
            difficulty: Difficulty::Beginner,
            duration: 20,
            tags: vec![],
            rating: None,
            rating_count: None,
            featured: false,
            with_audio: true,
            with_cover: true,
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

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.rating_count = Some(count);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn without_audio(mut self) -> Self {
        self.with_audio = false;
        self
    }

    pub fn without_cover(mut self) -> Self {
        self.with_cover = false;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = at;
        self
    }

    pub fn build(self) -> Story {
        let slug = self.id.trim_start_matches("story-").to_string();
        Story {
            id: StoryId::new(self.id.clone()).unwrap(),
            title: self.title,
            author: self.author,
            slug: StorySlug::new(slug.clone()).unwrap(),
            excerpt: self.excerpt,
            narrator: self.narrator,
            metadata: StoryMetadata {
                genre: Genres::new(self.genres).unwrap(),
                difficulty: self.difficulty,
                duration: DurationMinutes::new(self.duration).unwrap(),
                tags: self.tags,
                is_new: false,
                rating: self.rating,
                rating_count: self.rating_count,
            },
            audio: self.with_audio.then(|| StoryAudio {
                full_narration: format!("https://cdn.example.com/audio/{slug}.mp3"),
                chapter_breaks: vec![],
            }),
            cover_image: self.with_cover.then(|| CoverImage {
                url: format!("https://cdn.example.com/covers/{slug}.jpg"),
                alt: "cover".into(),
                width: Some(800),
                height: Some(1200),
            }),
            content: Some(serde_json::json!([{ "_type": "block", "text": "Once upon a time" }])),
            featured: self.featured,
            published_at: self.published_at,
        }
    }
}

/// A small catalog spanning every sort key and filter dimension.
pub fn sample_catalog() -> (Vec<Story>, Vec<Narrator>) {
    let ava = narrator("ava", "Ava Stone");
    let ben = narrator("ben", "ben Okafor");
    let stories = vec![
        StoryBuilder::new("whispers-in-the-wind")
            .title("Whispers in the Wind")
            .genres(&["Fantasy", "Adventure"])
            .duration(25)
            .tags(&["forest", "magic"])
            .rating(4.8, 120)
            .featured()
            .published_at(day(10))
            .build(),
        StoryBuilder::new("the-last-library")
            .title("The Last Library")
            .author("Ines Park")
            .narrator(ben.clone())
            .genres(&["Mystery"])
            .difficulty(Difficulty::Intermediate)
            .duration(45)
            .rating(4.2, 300)
            .published_at(day(5))
            .build(),
        StoryBuilder::new("songs-of-the-ancient-oak")
            .title("Songs of the Ancient Oak")
            .genres(&["Fantasy"])
            .difficulty(Difficulty::Advanced)
            .duration(90)
            .published_at(day(20))
            .build(),
        StoryBuilder::new("midnight-at-the-crossroads")
            .title("midnight at the Crossroads")
            .narrator(ben.clone())
            .genres(&["Horror", "Mystery"])
            .duration(15)
            .rating(3.9, 12)
            .featured()
            .published_at(day(1))
            .build(),
    ];
    (stories, vec![ava, ben])
}

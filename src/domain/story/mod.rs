pub mod entity;
pub mod value_objects;

pub use entity::{CoverImage, Story, StoryAudio, StoryMetadata};
pub use value_objects::{Difficulty, DurationMinutes, Genres, StoryId, StorySlug};

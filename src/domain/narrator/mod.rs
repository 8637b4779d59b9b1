pub mod entity;
pub mod value_objects;

pub use entity::{Narrator, NarratorAvatar, SocialLinks, VoiceProfile};
pub use value_objects::{NarratorId, NarratorSlug};

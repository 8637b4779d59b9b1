pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Bookmark, NewBookmark, ReadingProgress};
pub use repository::{BookmarkRepository, ReadingProgressRepository};
pub use value_objects::{LastPosition, ProgressPercentage, UserId};

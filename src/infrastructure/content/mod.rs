//! Story and narrator suppliers behind the `ContentSource` port.

mod cached;
mod error;
mod json_file;
mod records;
mod sanity;

pub use cached::CachedContentSource;
pub use error::ContentError;
pub use json_file::JsonFileContentSource;
pub use records::{ContentDocument, NarratorRecord, StoryRecord};
pub use sanity::{SanityConfig, SanityContentSource};

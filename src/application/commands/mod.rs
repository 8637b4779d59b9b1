pub mod comments;
pub mod content;
pub mod library;

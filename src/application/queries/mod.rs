pub mod comments;
pub mod library;
pub mod narrators;
pub mod stories;

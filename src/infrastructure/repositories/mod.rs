// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_bookmark;
mod postgres_comment;
mod postgres_progress;

pub use error::map_sqlx;
pub use postgres_bookmark::PostgresBookmarkRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_progress::PostgresReadingProgressRepository;

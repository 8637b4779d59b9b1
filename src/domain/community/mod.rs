pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentThread, NewComment, build_threads};
pub use repository::CommentRepository;
pub use value_objects::{CommentBody, CommentId, DisplayName};

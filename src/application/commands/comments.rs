use crate::{
    application::{
        commands::library::story_id,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::library::parse_user_id,
        validation::Violations,
    },
    domain::community::{CommentBody, CommentId, CommentRepository, DisplayName, NewComment},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const ANONYMOUS: &str = "Anonymous";

pub struct PostCommentCommand {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
    pub content: Option<String>,
    pub parent_id: Option<Uuid>,
    pub author_name: Option<String>,
}

pub struct CommentCommandService {
    repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(repo: Arc<dyn CommentRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn post_comment(&self, command: PostCommentCommand) -> ApplicationResult<CommentDto> {
        let user_id = parse_user_id(command.user_id.as_deref())?;
        let story_id = story_id(command.story_id.as_deref())?;

        let mut violations = Violations::new();
        let body = CommentBody::new(command.content.unwrap_or_default())
            .map_err(|err| violations.push("content", err.to_string()))
            .ok();
        let author_name = command
            .author_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        let author_name = DisplayName::new(author_name)
            .map_err(|err| violations.push("authorName", err.to_string()))
            .ok();
        violations.into_result("Invalid comment data")?;
        let (Some(body), Some(author_name)) = (body, author_name) else {
            return Err(ApplicationError::validation("invalid comment data"));
        };

        let parent_id = match command.parent_id.map(CommentId) {
            None => None,
            Some(id) => {
                let parent = self
                    .repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("Parent comment not found"))?;
                if parent.story_id != story_id {
                    return Err(ApplicationError::validation(
                        "parent comment belongs to a different story",
                    ));
                }
                Some(id)
            }
        };

        let now = self.clock.now();
        let created = self
            .repo
            .insert(NewComment {
                user_id,
                story_id,
                parent_id,
                body,
                author_name,
                created_at: now,
            })
            .await?;

        info!(comment_id = %created.id, story_id = %created.story_id, "comment posted");
        Ok(CommentDto::from_comment(created, now))
    }
}

use crate::{
    application::{
        dto::{BookmarkDto, ReadingProgressDto},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::library::parse_user_id,
        validation::{Violations, required},
    },
    domain::{
        errors::DomainError,
        library::{
            BookmarkRepository, LastPosition, NewBookmark, ProgressPercentage, ReadingProgress,
            ReadingProgressRepository,
        },
        story::StoryId,
    },
};
use std::sync::Arc;
use tracing::info;

pub struct AddBookmarkCommand {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
}

pub struct RemoveBookmarkCommand {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
}

pub struct RecordProgressCommand {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
    pub progress_percentage: Option<f64>,
    pub last_position: Option<f64>,
}

pub struct LibraryCommandService {
    bookmarks: Arc<dyn BookmarkRepository>,
    progress: Arc<dyn ReadingProgressRepository>,
    clock: Arc<dyn Clock>,
}

impl LibraryCommandService {
    pub fn new(
        bookmarks: Arc<dyn BookmarkRepository>,
        progress: Arc<dyn ReadingProgressRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookmarks,
            progress,
            clock,
        }
    }

    pub async fn add_bookmark(&self, command: AddBookmarkCommand) -> ApplicationResult<BookmarkDto> {
        let user_id = parse_user_id(command.user_id.as_deref())?;
        let story_id = story_id(command.story_id.as_deref())?;

        if self.bookmarks.find(user_id, &story_id).await?.is_some() {
            return Err(ApplicationError::conflict("Story already bookmarked"));
        }

        let created = self
            .bookmarks
            .insert(NewBookmark {
                user_id,
                story_id,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict("Story already bookmarked"),
                other => other.into(),
            })?;

        info!(user_id = %created.user_id, story_id = %created.story_id, "bookmark added");
        Ok(created.into())
    }

    pub async fn remove_bookmark(&self, command: RemoveBookmarkCommand) -> ApplicationResult<()> {
        let user_id = parse_user_id(command.user_id.as_deref())?;
        let story_id = story_id(command.story_id.as_deref())?;

        if !self.bookmarks.delete(user_id, &story_id).await? {
            return Err(ApplicationError::not_found("Bookmark not found"));
        }
        info!(%user_id, %story_id, "bookmark removed");
        Ok(())
    }

    /// Inserts or replaces the progress row for the `(user, story)` pair.
    pub async fn record_progress(
        &self,
        command: RecordProgressCommand,
    ) -> ApplicationResult<ReadingProgressDto> {
        let user_id = parse_user_id(command.user_id.as_deref())?;
        let story_id = story_id(command.story_id.as_deref())?;

        let mut violations = Violations::new();
        let percentage = match command.progress_percentage {
            None => {
                violations.push("progressPercentage", "is required");
                None
            }
            Some(value) => ProgressPercentage::new(value)
                .map_err(|_| violations.push("progressPercentage", "must be between 0 and 100"))
                .ok(),
        };
        let position = match command.last_position {
            None => Some(LastPosition::default()),
            Some(value) => LastPosition::new(value)
                .map_err(|_| violations.push("lastPosition", "must be at least 0"))
                .ok(),
        };
        violations.into_result("Invalid progress data")?;

        let (Some(progress_percentage), Some(last_position)) = (percentage, position) else {
            return Err(ApplicationError::validation("invalid progress data"));
        };

        let saved = self
            .progress
            .upsert(ReadingProgress {
                user_id,
                story_id,
                progress_percentage,
                last_position,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(saved.into())
    }
}

pub(crate) fn story_id(raw: Option<&str>) -> ApplicationResult<StoryId> {
    let mut violations = Violations::new();
    match required(&mut violations, "storyId", raw) {
        Some(value) => Ok(StoryId::new(value)?),
        None => Err(ApplicationError::invalid_parameters(
            "Story ID is required",
            vec!["storyId: is required".into()],
        )),
    }
}

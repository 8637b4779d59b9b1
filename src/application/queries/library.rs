use crate::{
    application::{
        dto::{BookmarkDto, ReadingProgressDto},
        error::{ApplicationError, ApplicationResult},
        validation::{Violations, required},
    },
    domain::{
        library::{BookmarkRepository, ReadingProgressRepository, UserId},
        story::StoryId,
    },
};
use std::sync::Arc;

pub struct ListBookmarksQuery {
    pub user_id: Option<String>,
}

pub struct ListProgressQuery {
    pub user_id: Option<String>,
    pub story_id: Option<String>,
}

pub struct LibraryQueryService {
    bookmarks: Arc<dyn BookmarkRepository>,
    progress: Arc<dyn ReadingProgressRepository>,
}

impl LibraryQueryService {
    pub fn new(
        bookmarks: Arc<dyn BookmarkRepository>,
        progress: Arc<dyn ReadingProgressRepository>,
    ) -> Self {
        Self { bookmarks, progress }
    }

    pub async fn list_bookmarks(&self, query: ListBookmarksQuery) -> ApplicationResult<Vec<BookmarkDto>> {
        let user_id = parse_user_id(query.user_id.as_deref())?;
        let bookmarks = self.bookmarks.list_for_user(user_id).await?;
        Ok(bookmarks.into_iter().map(BookmarkDto::from).collect())
    }

    pub async fn list_progress(
        &self,
        query: ListProgressQuery,
    ) -> ApplicationResult<Vec<ReadingProgressDto>> {
        let user_id = parse_user_id(query.user_id.as_deref())?;
        let story_id = query
            .story_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(StoryId::new)
            .transpose()?;

        let records = self
            .progress
            .list_for_user(user_id, story_id.as_ref())
            .await?;
        Ok(records.into_iter().map(ReadingProgressDto::from).collect())
    }
}

/// `userId` is mandatory on every user-state operation.
pub(crate) fn parse_user_id(raw: Option<&str>) -> ApplicationResult<UserId> {
    let mut violations = Violations::new();
    let Some(value) = required(&mut violations, "userId", raw) else {
        return Err(ApplicationError::invalid_parameters(
            "User ID is required",
            vec!["userId: is required".into()],
        ));
    };
    value.parse::<UserId>().map_err(|err| {
        ApplicationError::invalid_parameters("Invalid user ID", vec![format!("userId: {err}")])
    })
}

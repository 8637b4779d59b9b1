// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use fable_foundry::application::ports::time::Clock;
use fable_foundry::domain::community::{Comment, CommentId, CommentRepository, NewComment};
use fable_foundry::domain::content::ContentSource;
use fable_foundry::domain::errors::{DomainError, DomainResult};
use fable_foundry::domain::library::{
    Bookmark, BookmarkRepository, NewBookmark, ReadingProgress, ReadingProgressRepository, UserId,
};
use fable_foundry::domain::narrator::Narrator;
use fable_foundry::domain::story::{Story, StoryId};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct StaticContent {
    stories: Vec<Story>,
    narrators: Vec<Narrator>,
    unavailable: bool,
    pub refreshes: AtomicUsize,
}

impl StaticContent {
    pub fn new(stories: Vec<Story>, narrators: Vec<Narrator>) -> Self {
        Self {
            stories,
            narrators,
            unavailable: false,
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new(vec![], vec![])
        }
    }

    fn check(&self) -> DomainResult<()> {
        if self.unavailable {
            return Err(DomainError::Unavailable("cms returned 503".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for StaticContent {
    async fn fetch_stories(&self) -> DomainResult<Vec<Story>> {
        self.check()?;
        Ok(self.stories.clone())
    }

    async fn fetch_narrators(&self) -> DomainResult<Vec<Narrator>> {
        self.check()?;
        Ok(self.narrators.clone())
    }

    async fn refresh(&self) -> DomainResult<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        self.check()
    }
}

#[derive(Default)]
pub struct InMemoryBookmarks {
    rows: Mutex<Vec<Bookmark>>,
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarks {
    async fn insert(&self, bookmark: NewBookmark) -> DomainResult<Bookmark> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|b| b.user_id == bookmark.user_id && b.story_id == bookmark.story_id)
        {
            return Err(DomainError::Conflict("bookmark exists".into()));
        }
        let created = Bookmark {
            id: Uuid::new_v4(),
            user_id: bookmark.user_id,
            story_id: bookmark.story_id,
            created_at: bookmark.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<Option<Bookmark>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|b| b.user_id == user_id && &b.story_id == story_id)
            .cloned())
    }

    async fn delete(&self, user_id: UserId, story_id: &StoryId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| !(b.user_id == user_id && &b.story_id == story_id));
        Ok(rows.len() != before)
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Bookmark>> {
        let rows = self.rows.lock().unwrap();
        let mut mine: Vec<Bookmark> = rows.iter().filter(|b| b.user_id == user_id).cloned().collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }
}

#[derive(Default)]
pub struct InMemoryProgress {
    rows: Mutex<Vec<ReadingProgress>>,
}

#[async_trait]
impl ReadingProgressRepository for InMemoryProgress {
    async fn upsert(&self, progress: ReadingProgress) -> DomainResult<ReadingProgress> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|p| !(p.user_id == progress.user_id && p.story_id == progress.story_id));
        rows.push(progress.clone());
        Ok(progress)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        story_id: Option<&StoryId>,
    ) -> DomainResult<Vec<ReadingProgress>> {
        let rows = self.rows.lock().unwrap();
        let mut mine: Vec<ReadingProgress> = rows
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| story_id.is_none_or(|id| &p.story_id == id))
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(mine)
    }
}

#[derive(Default)]
pub struct InMemoryComments {
    rows: Mutex<Vec<Comment>>,
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let created = Comment {
            id: CommentId(Uuid::new_v4()),
            user_id: comment.user_id,
            story_id: comment.story_id,
            parent_id: comment.parent_id,
            body: comment.body,
            author_name: comment.author_name,
            upvotes: 0,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn list_for_story(&self, story_id: &StoryId) -> DomainResult<Vec<Comment>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| &c.story_id == story_id).cloned().collect())
    }
}

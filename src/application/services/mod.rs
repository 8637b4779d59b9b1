// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, content::ContentSyncService,
            library::LibraryCommandService,
        },
        ports::time::Clock,
        queries::{
            comments::CommentQueryService, library::LibraryQueryService,
            narrators::NarratorQueryService, stories::StoryQueryService,
        },
    },
    domain::{
        community::CommentRepository,
        content::ContentSource,
        library::{BookmarkRepository, ReadingProgressRepository},
    },
};

pub struct ApplicationServices {
    pub stories: Arc<StoryQueryService>,
    pub narrators: Arc<NarratorQueryService>,
    pub library_queries: Arc<LibraryQueryService>,
    pub library_commands: Arc<LibraryCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub content_sync: Arc<ContentSyncService>,
}

impl ApplicationServices {
    pub fn new(
        content: Arc<dyn ContentSource>,
        bookmark_repo: Arc<dyn BookmarkRepository>,
        progress_repo: Arc<dyn ReadingProgressRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let stories = Arc::new(StoryQueryService::new(Arc::clone(&content)));
        let narrators = Arc::new(NarratorQueryService::new(Arc::clone(&content)));
        let content_sync = Arc::new(ContentSyncService::new(Arc::clone(&content)));

        let library_queries = Arc::new(LibraryQueryService::new(
            Arc::clone(&bookmark_repo),
            Arc::clone(&progress_repo),
        ));
        let library_commands = Arc::new(LibraryCommandService::new(
            Arc::clone(&bookmark_repo),
            Arc::clone(&progress_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(comment_repo, clock));

        Self {
            stories,
            narrators,
            library_queries,
            library_commands,
            comment_queries,
            comment_commands,
            content_sync,
        }
    }
}

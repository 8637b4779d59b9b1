// src/domain/content.rs
use crate::domain::errors::DomainResult;
use crate::domain::narrator::Narrator;
use crate::domain::story::Story;
use async_trait::async_trait;
use std::collections::HashSet;

/// Supplier of the published story and narrator collections. The catalog
/// pipeline only ever sees the fully fetched arrays.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_stories(&self) -> DomainResult<Vec<Story>>;
    async fn fetch_narrators(&self) -> DomainResult<Vec<Narrator>>;

    /// Drop any locally held copy so the next fetch hits the origin.
    async fn refresh(&self) -> DomainResult<()> {
        Ok(())
    }
}

/// Cross-checks a freshly fetched snapshot. Every problem found is reported
/// as one human-readable line; an empty result means the snapshot is usable.
pub fn consistency_issues(stories: &[Story], narrators: &[Narrator]) -> Vec<String> {
    let known: HashSet<&str> = narrators.iter().map(|n| n.id.as_str()).collect();
    let mut issues = Vec::new();

    for story in stories {
        if !known.contains(story.narrator.id.as_str()) {
            issues.push(format!(
                "Story \"{}\" references missing narrator {}",
                story.title, story.narrator.id
            ));
        }
        if story.title.trim().is_empty() || story.author.trim().is_empty() {
            issues.push(format!("Story {} is missing title or author", story.id));
        }
        if story
            .cover_image
            .as_ref()
            .is_none_or(|image| image.url.trim().is_empty())
        {
            issues.push(format!("Story \"{}\" has no cover image", story.title));
        }
    }

    for narrator in narrators {
        if narrator.name.trim().is_empty() || narrator.bio.trim().is_empty() {
            issues.push(format!("Narrator {} is missing name or bio", narrator.id));
        }
        if !narrator.has_complete_avatar() {
            issues.push(format!(
                "Narrator \"{}\" is missing idle or speaking avatar",
                narrator.name
            ));
        }
    }

    issues
}

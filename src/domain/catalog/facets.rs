use crate::domain::story::Story;
use std::collections::BTreeSet;

/// Every genre tag used across `stories`, sorted and de-duplicated.
pub fn distinct_genres(stories: &[Story]) -> Vec<String> {
    stories
        .iter()
        .flat_map(|story| story.metadata.genre.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

//! The story catalog pipeline: filter, then sort, then paginate. Every stage
//! is a pure function over already-fetched records.

pub mod facets;
pub mod filter;
pub mod pagination;
pub mod sort;

#[cfg(test)]
pub(crate) mod fixtures;

pub use facets::distinct_genres;
pub use filter::{DurationRange, StoryFilter, filter_stories};
pub use pagination::{Page, PageInfo, PageRequest, paginate};
pub use sort::{SortKey, SortOrder, sort_stories};

use crate::domain::story::Story;

/// Runs the three stages in order.
pub fn query_catalog(
    stories: &[Story],
    criteria: &StoryFilter,
    key: SortKey,
    order: SortOrder,
    page: PageRequest,
) -> Page<Story> {
    let filtered = filter_stories(stories, criteria);
    let sorted = sort_stories(&filtered, key, order);
    paginate(&sorted, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::Difficulty;
    use super::fixtures::{StoryBuilder, ids};

    #[test]
    fn duration_and_difficulty_then_duration_ascending() {
        let levels = [
            Difficulty::Beginner,
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Advanced,
        ];
        let stories: Vec<Story> = [10, 20, 30, 40, 50]
            .into_iter()
            .zip(levels)
            .rev()
            .map(|(minutes, level)| {
                StoryBuilder::new(&minutes.to_string())
                    .duration(minutes)
                    .difficulty(level)
                    .build()
            })
            .collect();

        let criteria = StoryFilter {
            duration: Some(DurationRange {
                min: Some(15),
                max: Some(45),
            }),
            difficulty: Some(vec![Difficulty::Beginner, Difficulty::Intermediate]),
            ..Default::default()
        };
        let page = query_catalog(
            &stories,
            &criteria,
            SortKey::Duration,
            SortOrder::Asc,
            PageRequest::new(1, 20).unwrap(),
        );

        assert_eq!(ids(&page.data), ["20", "30"]);
        assert_eq!(page.data[0].metadata.difficulty, Difficulty::Beginner);
        assert_eq!(page.data[1].metadata.difficulty, Difficulty::Intermediate);
        assert_eq!(page.pagination.total, 2);
    }
}

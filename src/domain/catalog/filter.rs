// src/domain/catalog/filter.rs
use crate::domain::narrator::NarratorId;
use crate::domain::story::{Difficulty, Story};

/// Inclusive bounds on a story's running time in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl DurationRange {
    pub fn contains(&self, minutes: u32) -> bool {
        self.min.is_none_or(|min| min <= minutes) && self.max.is_none_or(|max| minutes <= max)
    }
}

/// Optional-field criteria. Present dimensions are ANDed together, values
/// inside one dimension are ORed. An absent or empty dimension does not
/// constrain anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryFilter {
    pub search: Option<String>,
    pub genre: Option<Vec<String>>,
    pub narrator: Option<Vec<NarratorId>>,
    pub duration: Option<DurationRange>,
    pub difficulty: Option<Vec<Difficulty>>,
}

impl StoryFilter {
    pub fn is_unconstrained(&self) -> bool {
        self.search_term().is_none()
            && non_empty(&self.genre).is_none()
            && non_empty(&self.narrator).is_none()
            && self.duration.is_none_or(|d| d.min.is_none() && d.max.is_none())
            && non_empty(&self.difficulty).is_none()
    }

    pub fn matches(&self, story: &Story) -> bool {
        self.matches_search(story)
            && self.matches_genre(story)
            && self.matches_narrator(story)
            && self.matches_duration(story)
            && self.matches_difficulty(story)
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_search(&self, story: &Story) -> bool {
        let Some(term) = self.search_term() else {
            return true;
        };
        [
            story.title.as_str(),
            story.author.as_str(),
            story.narrator.name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_genre(&self, story: &Story) -> bool {
        non_empty(&self.genre)
            .is_none_or(|wanted| wanted.iter().any(|g| story.metadata.genre.contains(g)))
    }

    fn matches_narrator(&self, story: &Story) -> bool {
        non_empty(&self.narrator).is_none_or(|wanted| wanted.contains(&story.narrator.id))
    }

    fn matches_duration(&self, story: &Story) -> bool {
        self.duration
            .is_none_or(|range| range.contains(story.duration_minutes()))
    }

    fn matches_difficulty(&self, story: &Story) -> bool {
        non_empty(&self.difficulty)
            .is_none_or(|wanted| wanted.contains(&story.metadata.difficulty))
    }
}

fn non_empty<T>(values: &Option<Vec<T>>) -> Option<&[T]> {
    values.as_deref().filter(|v| !v.is_empty())
}

/// Returns the stories satisfying `criteria`, in input order.
pub fn filter_stories(stories: &[Story], criteria: &StoryFilter) -> Vec<Story> {
    if criteria.is_unconstrained() {
        return stories.to_vec();
    }
    stories
        .iter()
        .filter(|story| criteria.matches(story))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::{StoryBuilder, ids, narrator};

    fn library() -> Vec<Story> {
        vec![
            StoryBuilder::new("1")
                .title("The Enchanted Grove")
                .author("Elena Moonwhisper")
                .genres(&["Fantasy", "Adventure"])
                .difficulty(Difficulty::Beginner)
                .duration(20)
                .build(),
            StoryBuilder::new("2")
                .title("Whispers in the Wind")
                .author("Luna Nightingale")
                .genres(&["Romance", "Drama"])
                .difficulty(Difficulty::Intermediate)
                .duration(45)
                .narrator(narrator("n2", "Marcus Shadowheart"))
                .build(),
            StoryBuilder::new("3")
                .title("The Crystal Caverns")
                .author("Willow Greenleaf")
                .genres(&["Adventure", "Mystery"])
                .difficulty(Difficulty::Advanced)
                .duration(60)
                .build(),
        ]
    }

    #[test]
    fn unconstrained_filter_returns_input_unchanged() {
        let stories = library();
        let result = filter_stories(&stories, &StoryFilter::default());
        assert_eq!(ids(&result), ["1", "2", "3"]);

        let empty_lists = StoryFilter {
            search: Some("   ".into()),
            genre: Some(vec![]),
            narrator: Some(vec![]),
            duration: Some(DurationRange::default()),
            difficulty: Some(vec![]),
        };
        assert_eq!(ids(&filter_stories(&stories, &empty_lists)), ["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let criteria = StoryFilter {
            search: Some("grove".into()),
            ..Default::default()
        };
        assert!(filter_stories(&[], &criteria).is_empty());
    }

    #[test]
    fn search_matches_author_when_title_and_narrator_do_not() {
        let criteria = StoryFilter {
            search: Some("luna".into()),
            ..Default::default()
        };
        let result = filter_stories(&library(), &criteria);
        assert_eq!(ids(&result), ["2"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_narrator() {
        let by_title = StoryFilter {
            search: Some("CRYSTAL".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &by_title)), ["3"]);

        let by_narrator = StoryFilter {
            search: Some("shadowheart".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &by_narrator)), ["2"]);
    }

    #[test]
    fn genre_uses_any_overlap() {
        let criteria = StoryFilter {
            genre: Some(vec!["Mystery".into(), "Fantasy".into()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &criteria)), ["1", "3"]);
    }

    #[test]
    fn narrator_filter_matches_by_id() {
        let criteria = StoryFilter {
            narrator: Some(vec![NarratorId::new("n2").unwrap()]),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &criteria)), ["2"]);
    }

    #[test]
    fn duration_bounds_are_inclusive_and_independent() {
        let both = StoryFilter {
            duration: Some(DurationRange {
                min: Some(20),
                max: Some(45),
            }),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &both)), ["1", "2"]);

        let min_only = StoryFilter {
            duration: Some(DurationRange {
                min: Some(46),
                max: None,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&filter_stories(&library(), &min_only)), ["3"]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let criteria = StoryFilter {
            genre: Some(vec!["Adventure".into()]),
            difficulty: Some(vec![Difficulty::Advanced]),
            ..Default::default()
        };
        let result = filter_stories(&library(), &criteria);
        // story 1 is Adventure but beginner, so only story 3 satisfies both
        assert_eq!(ids(&result), ["3"]);
        assert!(result.iter().all(|s| {
            s.metadata.genre.contains("Adventure") && s.metadata.difficulty == Difficulty::Advanced
        }));
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = StoryFilter {
            search: Some("the".into()),
            genre: Some(vec!["Adventure".into(), "Drama".into()]),
            duration: Some(DurationRange {
                min: Some(10),
                max: None,
            }),
            ..Default::default()
        };
        let once = filter_stories(&library(), &criteria);
        let twice = filter_stories(&once, &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }
}

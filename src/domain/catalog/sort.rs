// src/domain/catalog/sort.rs
use crate::domain::errors::DomainError;
use crate::domain::story::Story;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// `Newest` and `Oldest` both sort on publish time and differ only in their
/// default order, so `newest` + `asc` yields the same list as `oldest` + `asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Rating,
    Duration,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::Duration,
        SortKey::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::Duration => "duration",
            SortKey::Title => "title",
        }
    }

    /// Unknown or missing keys fall back to `newest`.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Direction used when the caller names a key but no order.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortKey::Newest | SortKey::Popular | SortKey::Rating => SortOrder::Desc,
            SortKey::Oldest | SortKey::Duration | SortKey::Title => SortOrder::Asc,
        }
    }

    /// Ascending comparison on the field this key sorts by.
    fn compare(&self, a: &Story, b: &Story) -> Ordering {
        match self {
            SortKey::Newest | SortKey::Oldest => a.published_at.cmp(&b.published_at),
            SortKey::Popular => a.rating_count_or_zero().cmp(&b.rating_count_or_zero()),
            SortKey::Rating => a.rating_or_zero().total_cmp(&b.rating_or_zero()),
            SortKey::Duration => a.duration_minutes().cmp(&b.duration_minutes()),
            SortKey::Title => compare_titles(&a.title, &b.title),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown sort key '{s}'")))
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::Validation(format!(
                "unknown sort order '{other}', expected asc or desc"
            ))),
        }
    }
}

// Case-folded first so "apple" and "Banana" interleave the way readers expect.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns a copy of `stories` ordered by `key` in `order`. Equal keys keep
/// their input order in both directions.
pub fn sort_stories(stories: &[Story], key: SortKey, order: SortOrder) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    // slice::sort_by is stable; reversing the comparator (not the output)
    // keeps ties in input order for `desc` too.
    sorted.sort_by(|a, b| order.apply(key.compare(a, b)));
    sorted
}

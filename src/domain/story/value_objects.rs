use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("story id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl From<StoryId> for String {
    fn from(value: StoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySlug(String);

impl StorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(DomainError::Validation(format!(
                "unknown difficulty '{other}', expected beginner, intermediate or advanced"
            ))),
        }
    }
}

/// Genre tags of a story. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genres(Vec<String>);

impl Genres {
    pub fn new(values: Vec<String>) -> DomainResult<Self> {
        let values: Vec<String> = values
            .into_iter()
            .filter(|genre| !genre.trim().is_empty())
            .collect();
        if values.is_empty() {
            return Err(DomainError::Validation(
                "a story needs at least one genre".into(),
            ));
        }
        Ok(Self(values))
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|g| g == genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Running time in whole minutes, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    pub fn new(minutes: u32) -> DomainResult<Self> {
        if minutes == 0 {
            return Err(DomainError::Validation(
                "duration must be a positive number of minutes".into(),
            ));
        }
        Ok(Self(minutes))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<DurationMinutes> for u32 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_reject_empty_and_blank_sets() {
        assert!(Genres::new(vec![]).is_err());
        assert!(Genres::new(vec!["  ".into()]).is_err());
        let genres = Genres::new(vec!["Fantasy".into(), "".into()]).unwrap();
        assert_eq!(genres.as_slice(), ["Fantasy".to_string()]);
    }

    #[test]
    fn duration_must_be_positive() {
        assert!(DurationMinutes::new(0).is_err());
        assert_eq!(DurationMinutes::new(42).unwrap().get(), 42);
    }

    #[test]
    fn difficulty_parses_lowercase_names() {
        assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("Expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Intermediate.to_string(), "intermediate");
    }
}

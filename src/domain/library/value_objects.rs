use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("user id is required".into()));
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid user id '{trimmed}'")))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Share of a story already read or listened to, within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProgressPercentage(f64);

impl ProgressPercentage {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DomainError::Validation(
                "progress percentage must be between 0 and 100".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Derives the percentage from a playback position, clamping rounding
    /// overshoot at the end of the media.
    pub fn from_position(position: f64, duration: f64) -> Self {
        if !duration.is_finite() || duration <= 0.0 || !position.is_finite() {
            return Self(0.0);
        }
        Self((position / duration * 100.0).clamp(0.0, 100.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Last reading or listening position. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LastPosition(f64);

impl LastPosition {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::Validation(
                "last position cannot be negative".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for LastPosition {
    fn default() -> Self {
        Self(0.0)
    }
}

// src/application/validation.rs
//! Field-level checks applied before input reaches the catalog or the
//! repositories. Messages read `path: problem`, one per violation.

use crate::application::error::{ApplicationError, ApplicationResult};
use std::str::FromStr;

pub const MAX_PAGE_LIMIT: i64 = 100;
pub const DEFAULT_PAGE_LIMIT: i64 = 20;
pub const MAX_DURATION_MINUTES: i64 = 300;

#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl AsRef<str>) {
        self.0.push(format!("{field}: {}", message.as_ref()));
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.push(field, message);
        }
    }

    /// Parses each value, recording a violation (indexed by position) for
    /// every value that fails.
    pub fn parse_each<T: FromStr>(&mut self, field: &str, values: &[String]) -> Vec<T>
    where
        T::Err: std::fmt::Display,
    {
        values
            .iter()
            .enumerate()
            .filter_map(|(idx, raw)| match raw.parse::<T>() {
                Ok(value) => Some(value),
                Err(err) => {
                    self.push(&format!("{field}.{idx}"), err.to_string());
                    None
                }
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self, message: &str) -> ApplicationResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::invalid_parameters(message, self.0))
        }
    }
}

/// Validated `(page, limit)` pair, still in caller units.
pub fn validate_pagination(page: i64, limit: i64) -> ApplicationResult<(u32, u32)> {
    let mut violations = Violations::new();
    violations.check(page >= 1, "page", "must be at least 1");
    violations.check(limit >= 1, "limit", "must be at least 1");
    violations.check(
        limit <= MAX_PAGE_LIMIT,
        "limit",
        "must be at most 100",
    );
    violations.check(page <= i64::from(u32::MAX), "page", "is too large");
    violations.into_result("Invalid pagination parameters")?;
    // both bounds were checked above
    Ok((page as u32, limit as u32))
}

/// Required identifier: present and non-blank.
pub fn required<'a>(violations: &mut Violations, field: &str, value: Option<&'a str>) -> Option<&'a str> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Some(v),
        None => {
            violations.push(field, "is required");
            None
        }
    }
}

// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod library;
pub mod narrators;
pub mod stories;
pub mod sync;

use crate::application::validation::Violations;
use crate::presentation::http::extractors::QueryPairs;

/// Integer query parameter. Missing or blank values yield `default`;
/// anything unparsable is recorded in `violations`.
pub(crate) fn int_param(
    params: &QueryPairs,
    key: &str,
    default: Option<i64>,
    violations: &mut Violations,
) -> Option<i64> {
    match params.first(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                violations.push(key, "must be an integer");
                default
            }
        },
    }
}

pub(crate) fn flag_param(params: &QueryPairs, key: &str) -> bool {
    params
        .first(key)
        .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

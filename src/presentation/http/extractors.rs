// src/presentation/http/extractors.rs
use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use super::error::HttpError;

/// `axum::Json` with rejections reported in the API's error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// Raw query string decoded as ordered key/value pairs, so repeated keys
/// (`?genre=a&genre=b`) are all kept.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn parse(query: &str) -> Result<Self, HttpError> {
        serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .map(Self)
            .map_err(|err| HttpError::bad_request("Invalid query string", vec![err.to_string()]))
    }

    /// First non-blank value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .find(|v| !v.trim().is_empty())
    }

    /// Every non-blank value for `key`; comma-separated values are split.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for QueryPairs {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.uri.query() {
            Some(query) => Self::parse(query),
            None => Ok(Self::default()),
        }
    }
}

use crate::domain::errors::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("CMS returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed content payload: {0}")]
    Decode(String),

    #[error("invalid record {id}: {source}")]
    Record {
        id: String,
        #[source]
        source: DomainError,
    },
}

impl ContentError {
    /// Client errors from the CMS are not worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentError::Network(_) => true,
            ContentError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<ContentError> for DomainError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Record { .. } | ContentError::Decode(_) => {
                DomainError::InvalidContent(err.to_string())
            }
            other => DomainError::Unavailable(other.to_string()),
        }
    }
}

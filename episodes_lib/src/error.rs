//! Error types for the library layer.

use std::fmt;

use crate::store::StoreError;

/// Errors returned by the library's fallible entry points: opening the
/// persistent cache, validated searches, and input checks.
///
/// The list state machine never returns these; it folds failures into
/// [`crate::ListState`] or swallows them.
#[derive(Debug)]
pub enum EpisodesError {
    /// An error from the underlying API client.
    Api(episodes_api::Error),
    /// The key-value store backing the cache failed.
    Store(StoreError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for EpisodesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Store(e) => write!(f, "Store error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for EpisodesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<episodes_api::Error> for EpisodesError {
    fn from(e: episodes_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<StoreError> for EpisodesError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

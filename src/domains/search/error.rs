//! Search-specific error types.
//!
//! The `Display` output of [`SearchError`] is exactly the message relayed to
//! callers inside an [`ErrorResult`].

use serde::Serialize;
use thiserror::Error;

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while submitting a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No credential was configured at startup.
    #[error("TAVILY_API_KEY environment variable not set.")]
    MissingApiKey,

    /// Transport failure, non-2xx status, or an undecodable response body.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Locally constructed failure body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Serialize into a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.error })
    }
}

impl From<&SearchError> for ErrorResult {
    fn from(err: &SearchError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<SearchError> for ErrorResult {
    fn from(err: SearchError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let result = ErrorResult::from(SearchError::MissingApiKey);
        assert_eq!(
            result.to_json(),
            serde_json::json!({ "error": "TAVILY_API_KEY environment variable not set." })
        );
    }
}

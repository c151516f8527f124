//! Search error types.
//!
//! Every failure inside the search path surfaces as a [`SearchError`] from
//! [`crate::SearchClient::fetch`].  The fail-open entry point
//! [`crate::SearchClient::search`] absorbs all of them.

/// Unified error type for the search path.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build search http client: {reason}")]
    ClientBuild { reason: String },

    /// The request could not be sent or its body could not be read.
    #[error("search request failed: {reason}")]
    RequestFailed { reason: String },

    /// The search endpoint answered with a non-success status.
    #[error("search endpoint returned status {status}")]
    Status { status: u16 },

    /// The request did not complete within the configured time limit.
    #[error("search timed out after {millis}ms")]
    Timeout { millis: u128 },

    /// A CSS selector used by the result parser is invalid.
    #[error("invalid result selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

/// Convenience alias used throughout the search crate.
pub type Result<T> = std::result::Result<T, SearchError>;

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed {
            reason: err.to_string(),
        }
    }
}

//! Adapter error types.
//!
//! Every failure on the chat-completion path is fatal to the request.  The
//! adapter surfaces it as an [`LlmError`], which the pipeline converts into a
//! failed [`crate::NormalizedReply`].

/// Unified error type for the chat-completion adapter.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The API key is missing for the configured provider.
    #[error("missing api key for provider: {provider}")]
    MissingApiKey { provider: String },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {reason}")]
    ClientBuild { reason: String },

    /// The request could not be sent or its body could not be read.
    #[error("llm request failed: {reason}")]
    RequestFailed { reason: String },

    /// The provider did not answer within the configured time limit.
    #[error("llm request timed out after {millis}ms")]
    Timeout { millis: u128 },

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("llm response parse error: {reason}")]
    ParseFailed { reason: String },

    /// The response envelope lacked the expected reply field.
    #[error("llm response missing `{field}`")]
    MissingField { field: String },

    /// The conversation handed to the adapter is unusable.
    #[error("validation error: {reason}")]
    Validation { reason: String },
}

/// Convenience alias used throughout the adapter crate.
pub type Result<T> = std::result::Result<T, LlmError>;

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailed {
            reason: err.to_string(),
        }
    }
}

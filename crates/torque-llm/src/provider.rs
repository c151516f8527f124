//! Provider descriptors.
//!
//! A [`ProviderDescriptor`] is built once from configuration at process
//! start and shared read-only by every request.  Its [`RequestShape`] tag
//! selects placement, role mapping and envelope parsing; no other part of
//! the adapter branches on the provider.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{LlmError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Gemini REST API base URL.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Groq OpenAI-compatible chat completions endpoint.
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// OpenAI chat completions endpoint.
const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default cap on generated tokens per reply.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Sampling temperature for the OpenAI-style shapes.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default time limit for one chat completion round trip.
pub const DEFAULT_CHAT_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How the conversation is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// `contents` of `user`/`model` turns with text `parts`; context is
    /// prefixed onto the first turn.  Replies in `candidates[0]`.
    Gemini,
    /// OpenAI-style `messages` of `user`/`assistant` turns only; context is
    /// prefixed onto the first turn.  Replies in `choices[0]`.
    TurnArray,
    /// OpenAI-style `messages` led by a dedicated `system` turn carrying the
    /// context.  Replies in `choices[0]`.
    SystemRole,
}

/// Where the API key travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `?key=<api key>` appended to the endpoint URL.
    UrlKey,
    /// `Authorization: Bearer <api key>` header.
    Bearer,
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// Everything the adapter needs to know about the active provider.
#[derive(Clone)]
pub struct ProviderDescriptor {
    /// Short provider name used in logs and status output.
    pub name: String,
    /// Full chat-completion endpoint URL, without credentials.
    pub endpoint: String,
    /// The provider secret.
    pub api_key: String,
    pub auth: AuthScheme,
    pub shape: RequestShape,
    /// Model identifier sent with (or embedded in) each request.
    pub model: String,
    /// Cap on generated tokens per reply.
    pub max_tokens: u32,
    /// Sampling temperature, when the shape carries one.
    pub temperature: Option<f32>,
    /// Total time limit for one chat completion.
    pub timeout: Duration,
}

impl ProviderDescriptor {
    /// Gemini `generateContent` (request shape A, key in the URL).
    pub fn gemini(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            name: "gemini".into(),
            endpoint: format!("{GEMINI_BASE_URL}/models/{model}:generateContent"),
            api_key: api_key.into(),
            auth: AuthScheme::UrlKey,
            shape: RequestShape::Gemini,
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    /// Groq with a bare user/assistant turn array (request shape B).
    pub fn groq(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: "groq".into(),
            endpoint: GROQ_CHAT_URL.into(),
            api_key: api_key.into(),
            auth: AuthScheme::Bearer,
            shape: RequestShape::TurnArray,
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: Some(DEFAULT_TEMPERATURE),
            timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    /// Groq with a leading system turn (request shape C).
    pub fn groq_full(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: "groq-full".into(),
            shape: RequestShape::SystemRole,
            ..Self::groq(api_key, model)
        }
    }

    /// OpenAI chat completions (request shape C).
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: "openai".into(),
            endpoint: OPENAI_CHAT_URL.into(),
            api_key: api_key.into(),
            auth: AuthScheme::Bearer,
            shape: RequestShape::SystemRole,
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: Some(DEFAULT_TEMPERATURE),
            timeout: DEFAULT_CHAT_TIMEOUT,
        }
    }

    /// Point the descriptor at a different endpoint (proxies, test stubs).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the cap on generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the request time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL to POST to, with the key embedded for [`AuthScheme::UrlKey`].
    pub fn request_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| LlmError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        if self.auth == AuthScheme::UrlKey {
            url.query_pairs_mut().append_pair("key", &self.api_key);
        }

        Ok(url)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("auth", &self.auth)
            .field("shape", &self.shape)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

//! HTTP chat-completion adapter.
//!
//! [`ConversationAdapter`] owns the read-only [`ProviderDescriptor`] and one
//! `reqwest` client.  Building the request body is pure and deterministic;
//! sending it is the single fail-closed step of the pipeline.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use torque_search::{FailurePolicy, SearchResult};

use crate::adapt::adapt_turns;
use crate::envelope::extract_reply;
use crate::error::{LlmError, Result};
use crate::provider::{AuthScheme, ProviderDescriptor, RequestShape};
use crate::types::{NormalizedReply, Turn};

/// Longest slice of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Provider-agnostic chat-completion adapter.
#[derive(Debug, Clone)]
pub struct ConversationAdapter {
    descriptor: Arc<ProviderDescriptor>,
    http: reqwest::Client,
}

impl ConversationAdapter {
    /// Create an adapter for the given provider.
    pub fn new(descriptor: ProviderDescriptor) -> Result<Self> {
        if descriptor.api_key.is_empty() {
            return Err(LlmError::MissingApiKey {
                provider: descriptor.name.clone(),
            });
        }

        // Fail at startup rather than on the first request.
        descriptor.request_url()?;

        let http = reqwest::Client::builder()
            .timeout(descriptor.timeout)
            .build()
            .map_err(|e| LlmError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            descriptor: Arc::new(descriptor),
            http,
        })
    }

    /// The provider this adapter targets.
    pub fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    // -----------------------------------------------------------------------
    // Public API
    // -----------------------------------------------------------------------

    /// Adapt the conversation, call the provider and normalize the outcome.
    ///
    /// Any failure becomes a failed [`NormalizedReply`]; there are no retries
    /// and never a partial message.
    pub async fn send(
        &self,
        turns: &[Turn],
        resources: Option<Vec<SearchResult>>,
    ) -> NormalizedReply {
        let outcome = match self.validate(turns) {
            Ok(()) => {
                let body = self.build_request(turns, resources.as_deref());
                self.complete(&body).await
            }
            Err(e) => Err(e),
        };

        match FailurePolicy::Surface.settle("chat completion", outcome) {
            Ok(message) => NormalizedReply::ok(message, resources),
            Err(e) => NormalizedReply::failure(e.to_string()),
        }
    }

    /// Build the JSON request body for the configured provider.
    pub fn build_request(&self, turns: &[Turn], resources: Option<&[SearchResult]>) -> Value {
        let d = &self.descriptor;
        let adapted = adapt_turns(turns, resources, d.shape);

        match d.shape {
            RequestShape::Gemini => {
                let mut generation = json!({ "maxOutputTokens": d.max_tokens });
                if let Some(temp) = d.temperature {
                    generation["temperature"] = json!(temp);
                }
                json!({
                    "contents": adapted,
                    "generationConfig": generation,
                })
            }
            RequestShape::TurnArray | RequestShape::SystemRole => {
                let mut body = json!({
                    "model": d.model,
                    "messages": adapted,
                    "max_tokens": d.max_tokens,
                });
                if let Some(temp) = d.temperature {
                    body["temperature"] = json!(temp);
                }
                body
            }
        }
    }

    /// POST a prepared body and extract the reply text.
    pub async fn complete(&self, body: &Value) -> Result<String> {
        let d = &self.descriptor;
        let url = d.request_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if d.auth == AuthScheme::Bearer {
            let auth_value = format!("Bearer {}", d.api_key);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value).map_err(|e| LlmError::RequestFailed {
                    reason: format!("invalid authorization header: {e}"),
                })?,
            );
        }

        tracing::debug!(
            endpoint = %d.endpoint,
            provider = %d.name,
            model = %d.model,
            "sending chat completion request"
        );

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: truncate(&text, ERROR_BODY_LIMIT),
            });
        }

        let v: Value = serde_json::from_str(&text).map_err(|e| LlmError::ParseFailed {
            reason: format!("invalid JSON response: {e}"),
        })?;

        let reply = extract_reply(d.shape, &v)?;
        tracing::debug!(provider = %d.name, reply_len = reply.len(), "chat completion received");
        Ok(reply)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn validate(&self, turns: &[Turn]) -> Result<()> {
        if turns.is_empty() {
            return Err(LlmError::Validation {
                reason: "conversation has no turns".into(),
            });
        }
        Ok(())
    }

    fn transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout {
                millis: self.descriptor.timeout.as_millis(),
            }
        } else {
            LlmError::from(err)
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

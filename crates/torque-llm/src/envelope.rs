//! Reply extraction from provider response envelopes.

use serde_json::Value;

use crate::error::{LlmError, Result};
use crate::provider::RequestShape;

/// Extract the reply text from a provider response.
///
/// Gemini replies live at `candidates[0].content.parts[0].text`; the
/// OpenAI-style shapes at `choices[0].message.content`.  A missing or
/// non-string field is an error, never an empty reply.
pub fn extract_reply(shape: RequestShape, response: &Value) -> Result<String> {
    let (pointer, field) = match shape {
        RequestShape::Gemini => (
            "/candidates/0/content/parts/0/text",
            "candidates[0].content.parts[0].text",
        ),
        RequestShape::TurnArray | RequestShape::SystemRole => (
            "/choices/0/message/content",
            "choices[0].message.content",
        ),
    };

    response
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| LlmError::MissingField {
            field: field.to_owned(),
        })
}

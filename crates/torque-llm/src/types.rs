//! Conversation and reply types.
//!
//! These are provider-agnostic; [`crate::adapt`] translates them into each
//! provider's wire format.

use serde::{Deserialize, Serialize};
use torque_search::SearchResult;

// ---------------------------------------------------------------------------
// Turns
// ---------------------------------------------------------------------------

/// The role of a participant in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that shape model behavior.
    System,
    /// Input from the human user.
    User,
    /// Earlier output from the model.
    Assistant,
}

/// A single message in a conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who produced this turn.
    pub role: Role,

    /// The textual content of the turn.
    #[serde(default, alias = "text")]
    pub content: String,
}

impl Turn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized reply
// ---------------------------------------------------------------------------

/// The single reply shape returned to callers, whichever provider answered.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    /// Whether the chat completion succeeded.
    pub success: bool,
    /// The model's reply text.  Empty on failure.
    pub message: String,
    /// The search hits folded into the request; `None` when no search ran.
    pub resources: Option<Vec<SearchResult>>,
    /// Failure description.  `None` on success.
    pub error: Option<String>,
}

impl NormalizedReply {
    /// A successful reply.
    pub fn ok(message: impl Into<String>, resources: Option<Vec<SearchResult>>) -> Self {
        Self {
            success: true,
            message: message.into(),
            resources,
            error: None,
        }
    }

    /// A failed reply.  Never carries a partial message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: String::new(),
            resources: None,
            error: Some(error.into()),
        }
    }
}

//! Chat-completion adapter for Torque.
//!
//! Takes a raw conversation plus the (optional) web search results, merges
//! the search context into the conversation according to the target
//! provider's message schema, calls the provider and normalizes the reply.
//!
//! ## Request shapes
//!
//! ```text
//! ┌──────────────┬────────────────────────────┬──────────────────────┐
//! │ Shape        │ Context placement          │ Reply envelope       │
//! ├──────────────┼────────────────────────────┼──────────────────────┤
//! │ Gemini       │ prefixed onto first turn   │ candidates[0]...text │
//! │ TurnArray    │ prefixed onto first turn   │ choices[0].message   │
//! │ SystemRole   │ dedicated leading system   │ choices[0].message   │
//! └──────────────┴────────────────────────────┴──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] -- conversation turns and the normalized reply.
//! - [`provider`] -- provider descriptors (endpoint, auth, shape, limits).
//! - [`context`] -- the augmentation context string.
//! - [`adapt`] -- placement and role mapping per request shape.
//! - [`envelope`] -- reply extraction from provider response envelopes.
//! - [`client`] -- the HTTP adapter tying it together.
//! - [`error`] -- adapter error types.

pub mod adapt;
pub mod client;
pub mod context;
pub mod envelope;
pub mod error;
pub mod provider;
pub mod types;

pub use adapt::{adapt_turns, wire_role};
pub use client::ConversationAdapter;
pub use context::{PREAMBLE, build_context};
pub use envelope::extract_reply;
pub use error::{LlmError, Result};
pub use provider::{AuthScheme, ProviderDescriptor, RequestShape};
pub use types::{NormalizedReply, Role, Turn};

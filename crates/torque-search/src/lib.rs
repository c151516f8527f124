//! Web search augmentation for Torque.
//!
//! Decides whether a chat turn warrants a web lookup, builds the lookup
//! query from the vehicle description, and scrapes a bounded, ordered list
//! of [`SearchResult`]s from the DuckDuckGo HTML endpoint.
//!
//! - [`trigger`] -- the trigger-phrase heuristic ([`should_search`]).
//! - [`query`] -- query construction from [`VehicleInfo`] and the user text.
//! - [`duckduckgo`] -- the markup-specific result page parser.
//! - [`client`] -- the HTTP search client with its fail-open entry point.
//! - [`policy`] -- [`FailurePolicy`], the absorb/surface switch used at every
//!   outbound call site.
//! - [`error`] -- search error types.

pub mod client;
pub mod duckduckgo;
pub mod error;
pub mod policy;
pub mod query;
pub mod trigger;
pub mod types;

pub use client::{SearchClient, SearchConfig};
pub use error::{Result, SearchError};
pub use policy::FailurePolicy;
pub use query::build_query;
pub use trigger::{TRIGGER_PHRASES, matched_trigger, should_search};
pub use types::{SearchResult, VehicleInfo};

/// Hard cap on the number of results a single search may produce.
pub const MAX_RESULTS: usize = 5;

//! Shared application state for the web server.

use std::sync::Arc;

use torque_llm::ConversationAdapter;
use torque_search::SearchClient;

use crate::WebConfig;

/// Shared state accessible from every Axum handler.
///
/// Both clients are read-only after construction, so concurrent requests
/// share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// Fail-open web search client.
    pub search: Arc<SearchClient>,

    /// Chat-completion adapter for the configured provider.
    pub adapter: Arc<ConversationAdapter>,

    /// Web server configuration.
    pub config: WebConfig,
}

impl AppState {
    pub fn new(search: SearchClient, adapter: ConversationAdapter, config: WebConfig) -> Self {
        Self {
            search: Arc::new(search),
            adapter: Arc::new(adapter),
            config,
        }
    }
}

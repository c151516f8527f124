//! Main web server setup and startup.

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use torque_llm::ConversationAdapter;
use torque_search::SearchClient;

use crate::WebConfig;
use crate::api;
use crate::frontend::INDEX_HTML;
use crate::state::AppState;

/// The Torque web server.
pub struct WebServer {
    config: WebConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    ///
    /// # Arguments
    ///
    /// * `config` - Bind address and port configuration.
    /// * `search` - The fail-open web search client.
    /// * `adapter` - The chat-completion adapter shared across all requests.
    pub fn new(config: WebConfig, search: SearchClient, adapter: ConversationAdapter) -> Self {
        let state = Arc::new(AppState::new(search, adapter, config.clone()));
        Self { config, state }
    }

    /// Return the `host:port` string this server will bind to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.bind_addr, self.config.port)
    }

    /// Build the Axum router with all routes registered.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);

        Router::new()
            .route("/", get(|| async { Html(INDEX_HTML) }))
            .route("/api/status", get(api::status))
            .route("/api/chat", post(api::chat))
            .layer(cors)
            .with_state(Arc::clone(&self.state))
    }

    /// Start the server and block until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound.
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.addr();
        let router = self.router();

        let descriptor = self.state.adapter.descriptor();
        tracing::info!(
            addr = %addr,
            provider = %descriptor.name,
            model = %descriptor.model,
            "starting web server"
        );

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

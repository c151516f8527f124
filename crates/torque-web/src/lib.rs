//! Web interface for Torque.
//!
//! This crate exposes the chat pipeline over HTTP:
//!
//! - `POST /api/chat` runs one conversation turn (search, adapt, complete).
//! - `GET /api/status` reports the configured provider without calling it.
//! - `GET /` serves the embedded single-page chat UI.

pub mod api;
pub mod frontend;
pub mod pipeline;
pub mod server;
pub mod state;

pub use pipeline::run_chat;
pub use server::WebServer;
pub use state::AppState;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// The address to bind the HTTP server to.
    pub bind_addr: String,
    /// The port to listen on.
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".into(),
            port: 5000,
        }
    }
}

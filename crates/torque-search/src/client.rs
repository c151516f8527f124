//! HTTP search client.
//!
//! [`SearchClient::fetch`] reports every failure as a [`SearchError`];
//! [`SearchClient::search`] is the fail-open entry point that the chat
//! pipeline uses, turning any failure into an empty result list.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::MAX_RESULTS;
use crate::duckduckgo::parse_results;
use crate::error::{Result, SearchError};
use crate::policy::FailurePolicy;
use crate::query::build_query;
use crate::trigger::matched_trigger;
use crate::types::{SearchResult, VehicleInfo};

// ═══════════════════════════════════════════════════════════════════════
//  Constants
// ═══════════════════════════════════════════════════════════════════════

/// DuckDuckGo HTML search endpoint.
pub const DUCKDUCKGO_HTML_URL: &str = "https://html.duckduckgo.com/html/";

/// Desktop browser User-Agent; the HTML endpoint rejects obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Default time limit for one search round trip.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

// ═══════════════════════════════════════════════════════════════════════
//  Configuration
// ═══════════════════════════════════════════════════════════════════════

/// Search client configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Result page endpoint; the query is sent as the `q` parameter.
    pub endpoint: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Total time limit for the request, including reading the body.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DUCKDUCKGO_HTML_URL.to_owned(),
            user_agent: BROWSER_USER_AGENT.to_owned(),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }
}

impl SearchConfig {
    /// Point the client at a different result page endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Client
// ═══════════════════════════════════════════════════════════════════════

/// Web search client backed by the DuckDuckGo HTML endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: SearchConfig,
    http: reqwest::Client,
}

impl SearchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the trigger heuristic on the latest user text and, when it fires,
    /// search for the vehicle-qualified query.
    ///
    /// Returns `None` when no search was warranted and `Some` (possibly
    /// empty) when one was performed.
    pub async fn maybe_search(
        &self,
        last_user_text: &str,
        vehicle: &VehicleInfo,
    ) -> Option<Vec<SearchResult>> {
        let Some(trigger) = matched_trigger(last_user_text) else {
            debug!("no trigger phrase, skipping web search");
            return None;
        };

        let query = build_query(vehicle, &last_user_text.to_lowercase());
        info!(trigger, query = %query, "web search triggered");

        Some(self.search(&query).await)
    }

    /// Search and never fail: any error yields an empty list.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        FailurePolicy::Absorb
            .settle("web search", self.fetch(query).await)
            .unwrap_or_default()
    }

    /// Search and report failures.
    ///
    /// Results keep page order and never exceed [`MAX_RESULTS`].
    pub async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>> {
        let started = Instant::now();
        debug!(query, endpoint = %self.config.endpoint, "performing web search");

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| self.transport_error(e))?;
        let results = parse_results(&html, MAX_RESULTS)?;

        debug!(
            count = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "web search completed"
        );

        Ok(results)
    }

    fn transport_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout {
                millis: self.config.timeout.as_millis(),
            }
        } else {
            SearchError::from(err)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_duckduckgo() {
        let config = SearchConfig::default();
        assert_eq!(config.endpoint, DUCKDUCKGO_HTML_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn builder_overrides_endpoint_and_timeout() {
        let config = SearchConfig::default()
            .with_endpoint("http://127.0.0.1:9/html/")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.endpoint, "http://127.0.0.1:9/html/");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn maybe_search_skips_untriggered_text() {
        // The endpoint is unroutable; reaching it would still yield Some(vec![]).
        let client =
            SearchClient::new(SearchConfig::default().with_endpoint("http://127.0.0.1:9/")).unwrap();
        let outcome = client
            .maybe_search("my engine is overheating", &VehicleInfo::default())
            .await;
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn search_against_unreachable_host_is_empty() {
        let client = SearchClient::new(
            SearchConfig::default()
                .with_endpoint("http://127.0.0.1:9/html/")
                .with_timeout(Duration::from_millis(500)),
        )
        .unwrap();
        assert!(client.search("fuse diagram").await.is_empty());
        assert!(client.fetch("fuse diagram").await.is_err());
    }
}

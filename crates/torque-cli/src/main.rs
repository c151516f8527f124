//! CLI entry point for Torque.
//!
//! This binary provides the `torque` command: `serve` starts the chat web
//! server and `search` runs the web search on its own.

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use torque_llm::ConversationAdapter;
use torque_search::{SearchClient, SearchConfig};
use torque_web::{WebConfig, WebServer};

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, port } => cmd_serve(bind, port).await,
        Commands::Search { query } => cmd_search(query.join(" ")).await,
    }
}

// ---------------------------------------------------------------------------
// Subcommand: serve
// ---------------------------------------------------------------------------

async fn cmd_serve(bind: String, port: Option<u16>) -> Result<()> {
    init_tracing("info");

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let port = port.unwrap_or(config.port);

    let search =
        SearchClient::new(SearchConfig::default()).context("failed to build search client")?;
    let adapter =
        ConversationAdapter::new(config.provider).context("failed to build chat adapter")?;

    info!(
        provider = %adapter.descriptor().name,
        model = %adapter.descriptor().model,
        "chat provider configured"
    );

    let server = WebServer::new(WebConfig { bind_addr: bind, port }, search, adapter);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("web server error: {e}"))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: search
// ---------------------------------------------------------------------------

async fn cmd_search(query: String) -> Result<()> {
    init_tracing("warn");

    let client =
        SearchClient::new(SearchConfig::default()).context("failed to build search client")?;
    let results = client
        .fetch(&query)
        .await
        .with_context(|| format!("search for {query:?} failed"))?;

    if results.is_empty() {
        println!("No results for {query:?}");
        return Ok(());
    }

    for (i, hit) in results.iter().enumerate() {
        println!("{}. {}", i + 1, hit.title);
        println!("   {}", hit.url);
        if !hit.snippet.is_empty() {
            println!("   {}", hit.snippet);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

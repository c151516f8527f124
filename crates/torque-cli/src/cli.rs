//! CLI argument definitions for Torque.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use clap::{Parser, Subcommand};

/// Torque -- a search-augmented automotive repair chat assistant.
#[derive(Parser)]
#[command(
    name = "torque",
    version,
    about = "Torque -- automotive repair chat assistant",
    long_about = "Answers car repair questions through a hosted chat model, attaching \
                  web search results when the question asks for diagrams, manuals or locations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server with embedded chat UI.
    Serve {
        /// Address to bind the HTTP server to.
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on. Defaults to `PORT`, then 5000.
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Run one web search and print the parsed results.
    Search {
        /// Search terms, joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["torque", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { bind, port } => {
                assert_eq!(bind, "0.0.0.0");
                assert_eq!(port, None);
            }
            Commands::Search { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn serve_port_flag() {
        let cli = Cli::try_parse_from(["torque", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), .. }));
    }

    #[test]
    fn search_collects_terms() {
        let cli = Cli::try_parse_from(["torque", "search", "civic", "fuse", "diagram"]).unwrap();
        match cli.command {
            Commands::Search { query } => assert_eq!(query.join(" "), "civic fuse diagram"),
            Commands::Serve { .. } => panic!("expected search"),
        }
    }

    #[test]
    fn search_requires_terms() {
        assert!(Cli::try_parse_from(["torque", "search"]).is_err());
    }
}

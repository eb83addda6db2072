//! gh-autocomplete: search GitHub users and repositories as you type
//!
//! This is the main entry point for the application.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use github_autocomplete::{
    config::Settings,
    network::{HttpClient, Transport},
    tui,
    web::{create_router, AppState},
    Autocomplete, GithubSearch, SearchProvider,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search-as-you-type over GitHub users and repositories
#[derive(Parser)]
#[command(name = "gh-autocomplete")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal widget (default)
    Tui,

    /// Serve the autocomplete endpoint over HTTP
    Serve,

    /// Run a single search and print the outcome as JSON
    Search {
        /// Search query
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    // Load configuration
    let settings = Settings::load(cli.config.as_deref())?;

    // Initialize logging
    init_logging(
        cli.verbose || settings.general.debug,
        matches!(command, Commands::Tui),
    );
    info!("Starting gh-autocomplete v{}", github_autocomplete::VERSION);

    // Initialize HTTP client and adapter
    let client: Arc<dyn Transport> = Arc::new(HttpClient::with_settings(&settings.outgoing)?);
    let provider: Arc<dyn SearchProvider> =
        Arc::new(GithubSearch::from_settings(&settings.github, client)?);

    match command {
        Commands::Tui => run_tui(settings, provider).await,
        Commands::Serve => serve(settings, provider).await,
        Commands::Search { query } => run_search(provider, &query).await,
    }
}

/// Log to stderr; `RUST_LOG` wins over the computed default
fn init_logging(debug: bool, interactive: bool) {
    let default = if debug {
        "debug"
    } else if interactive {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_tui(settings: Settings, provider: Arc<dyn SearchProvider>) -> Result<()> {
    let autocomplete = Autocomplete::from_settings(provider, &settings.autocomplete);
    tui::run(autocomplete, &settings.autocomplete.placeholder).await
}

async fn serve(settings: Settings, provider: Arc<dyn SearchProvider>) -> Result<()> {
    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let app = create_router(AppState::new(provider));

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_search(provider: Arc<dyn SearchProvider>, query: &str) -> Result<()> {
    let outcome = provider.search(query).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if let Some(message) = outcome.error_message() {
        bail!("search for {:?} failed: {}", query, message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use github_autocomplete::autocomplete::SearchFn;
    use github_autocomplete::{ResultItem, SearchOutcome};

    #[tokio::test]
    async fn test_search_command_succeeds_with_results() {
        let provider: Arc<dyn SearchProvider> = Arc::new(SearchFn::new(|query: String| async move {
            SearchOutcome::found(vec![ResultItem::new(query)])
        }));
        assert!(run_search(provider, "octocat").await.is_ok());
    }

    #[tokio::test]
    async fn test_search_command_fails_on_error_outcome() {
        let provider: Arc<dyn SearchProvider> = Arc::new(SearchFn::new(|_query: String| async {
            SearchOutcome::failed("HTTP error: 400")
        }));
        let err = run_search(provider, "octocat").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "search for \"octocat\" failed: HTTP error: 400"
        );
    }
}

//! Drop Token - REST game server
//!
//! Serves the 4x4 Drop Token game over HTTP.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use drop_token::{Cli, Command, QuitPolicy, ServerConfig, SessionStore};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            config,
            quit_policy,
        } => serve(host, port, config, quit_policy).await,
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn serve(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
    quit_policy: Option<QuitPolicy>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match config {
        Some(path) if path.exists() => ServerConfig::from_file(path)?,
        Some(path) => {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            ServerConfig::default()
        }
        None => ServerConfig::default(),
    }
    .with_overrides(host, port, quit_policy);

    info!(
        host = %config.host(),
        port = config.port(),
        quit_policy = %config.quit_policy(),
        "Starting Drop Token server"
    );

    let store = SessionStore::new();
    let app = drop_token::router(store, *config.quit_policy());

    let listener =
        tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/drop_token",
        config.host(),
        config.port()
    );
    axum::serve(listener, app).await?;

    Ok(())
}

//! Command-line interface for drop_token.

use crate::game::QuitPolicy;
use clap::{Parser, Subcommand};

/// Drop Token - a 4x4 token-dropping game served over REST
#[derive(Parser, Debug)]
#[command(name = "drop_token")]
#[command(about = "REST server for the 4x4 Drop Token game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// What a quit does to a live game: remove, end, or forfeit
        #[arg(long)]
        quit_policy: Option<QuitPolicy>,
    },
}

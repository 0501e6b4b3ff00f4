//! CLI Command Definitions
//!
//! Command tree for the tokenwatch binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tokenwatch - live market tracker for a single Solana token
#[derive(Parser, Debug)]
#[command(
    name = "tokenwatch",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Live market tracker for a single Solana token",
    long_about = "tokenwatch follows one token on the SolanaTracker data API, \
                  caching snapshots behind a freshness window and rendering \
                  live updates in the terminal."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Follow the token and render live updates until Ctrl-C
    Watch(WatchCmd),

    /// Fetch one snapshot and print it
    Fetch(FetchCmd),
}

/// Follow the token and render live updates
#[derive(Parser, Debug)]
pub struct WatchCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Override the poll interval in seconds
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Fetch one snapshot and print it
#[derive(Parser, Debug)]
pub struct FetchCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Print the snapshot as JSON instead of the display block
    #[arg(long)]
    pub json: bool,
}

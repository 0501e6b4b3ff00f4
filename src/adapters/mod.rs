//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - SolanaTracker: token market data API client
//! - CLI: command-line interface definitions

pub mod cli;
pub mod solana_tracker;

pub use cli::CliApp;
pub use solana_tracker::SolanaTrackerClient;

//! SolanaTracker Adapter
//!
//! HTTP client and wire types for the SolanaTracker data API.

pub mod client;
pub mod types;

pub use client::{SolanaTrackerClient, SolanaTrackerConfig, DEFAULT_BASE_URL, SOURCE_NAME};

//! Application Layer
//!
//! The cached data client, its polling loop, and the orchestrator that
//! wires live updates to the display.

pub mod data_client;
pub mod orchestrator;

pub use data_client::{CacheEntry, PollHandle, TokenDataClient};
pub use orchestrator::{TrackerOrchestrator, TrackerStatus};

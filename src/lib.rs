//! tokenwatch - Live Token Market Tracker Library
//!
//! Follows a single Solana token on the SolanaTracker data API: a cached
//! data client with a freshness window, a polling loop for live updates,
//! and a terminal display board.
//!
//! # Modules
//!
//! - `domain`: Core value types (TokenSnapshot, DisplayBoard, formatting)
//! - `ports`: Trait abstractions (TokenDataSource) and test doubles
//! - `adapters`: External implementations (SolanaTracker API, CLI)
//! - `application`: Cached client, polling loop, and tracker orchestration
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Ports Layer - Trait definitions for external dependencies
//!
//! Trait seams between the application layer and external adapters,
//! plus scripted test doubles.

pub mod mocks;
pub mod token_data;

pub use token_data::{FetchError, TokenDataSource};

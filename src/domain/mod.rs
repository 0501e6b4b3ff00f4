//! Core Domain Types
//!
//! Value types and presentation logic with no I/O dependencies.

pub mod display;
pub mod format;
pub mod snapshot;

pub use display::DisplayBoard;
pub use snapshot::TokenSnapshot;

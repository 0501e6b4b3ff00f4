//! CLI Adapter
//!
//! Command-line interface for the tokenwatch binary.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, FetchCmd, WatchCmd};

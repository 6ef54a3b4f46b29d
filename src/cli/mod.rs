//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `rides` - List or search the ride catalogue

pub mod args;

pub use args::{Cli, Commands};

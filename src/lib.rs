//! Car Sharing - Ride sharing backend
//!
//! Drivers publish rides, passengers search, favorite and book them.
//! Everything lives in memory; the first stored user is the session user.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and screen navigation
//! - **services**: Application use cases and business logic
//! - **infra**: In-memory repositories, Unit of Work and seed data
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Search the mockup catalogue
//! cargo run -- rides search --from ulm --to frankfurt
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Ride, User, ViewType};
pub use errors::{AppError, AppResult};
pub use infra::Persistence;

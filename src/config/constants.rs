//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Seed the mockup catalogue on startup unless disabled
pub const DEFAULT_SEED_DATA: bool = true;

// =============================================================================
// Screens
// =============================================================================

/// Prefix of every screen title
pub const WINDOW_TITLE_PREFIX: &str = "Car Sharing";

/// Message returned by the setup endpoint
pub const SETUP_COMPLETED_MESSAGE: &str = "Setup completed! Created 3 users and 3 rides.";

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Car Sharing - find, favorite and book shared rides
#[derive(Parser, Debug)]
#[command(name = "car-sharing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Browse the mockup ride catalogue
    Rides(RidesArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,

    /// Start with empty stores instead of the mockup catalogue
    #[arg(long)]
    pub no_seed: bool,
}

/// Arguments for the rides command
#[derive(Parser, Debug)]
pub struct RidesArgs {
    #[command(subcommand)]
    pub action: RidesAction,
}

/// Ride catalogue actions
#[derive(Subcommand, Debug)]
pub enum RidesAction {
    /// List every ride
    List,
    /// Search by origin and destination (case-insensitive substrings)
    Search {
        /// Origin, e.g. "Ulm"
        #[arg(long)]
        from: Option<String>,
        /// Destination, e.g. "Frankfurt"
        #[arg(long)]
        to: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["car-sharing", "rides", "search", "--from", "ulm"]);
        match cli.command {
            Commands::Rides(RidesArgs {
                action: RidesAction::Search { from, to },
            }) => {
                assert_eq!(from.as_deref(), Some("ulm"));
                assert!(to.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::parse_from(["car-sharing", "-v", "serve", "--port", "8080", "--no-seed"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 8080);
                assert!(args.no_seed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

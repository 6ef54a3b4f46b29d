//! Infrastructure layer - Storage and seed data
//!
//! - In-memory repositories for rides and users
//! - Unit of Work giving services one handle on all repositories
//! - Seed data for the mockup catalogue and the setup endpoint

pub mod repositories;
pub mod seed;
pub mod unit_of_work;

pub use repositories::{RideRepository, RideStore, UserRepository, UserStore};
pub use seed::{load_mockup, run_setup, SeedSummary, SESSION_USER_ID};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRideRepository, MockUserRepository};

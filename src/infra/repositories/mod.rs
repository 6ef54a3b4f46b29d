//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Both stores keep their rows in memory.

mod base;
mod ride_repository;
mod user_repository;

pub use base::{Identified, Table};
pub use ride_repository::{RideRepository, RideStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use ride_repository::MockRideRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

//! Unit of Work pattern implementation.
//!
//! Centralizes access to the ride and user repositories so services
//! depend on one handle instead of each store separately.

use std::sync::Arc;

use super::repositories::{RideRepository, RideStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get ride repository
    fn rides(&self) -> Arc<dyn RideRepository>;

    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of UnitOfWork
#[derive(Clone)]
pub struct Persistence {
    ride_repo: Arc<dyn RideRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl Default for Persistence {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Persistence {
    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(Arc::new(RideStore::new()), Arc::new(UserStore::new()))
    }

    /// Wrap existing repositories (used by tests to inject mocks)
    pub fn new(ride_repo: Arc<dyn RideRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            ride_repo,
            user_repo,
        }
    }
}

impl UnitOfWork for Persistence {
    fn rides(&self) -> Arc<dyn RideRepository> {
        self.ride_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}

//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and storage.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{load_mockup, Persistence, UnitOfWork};
use crate::services::{
    BookingService, FavoriteService, NavigationService, RideService, ServiceContainer, Services,
    SessionService, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub ride_service: Arc<dyn RideService>,
    pub user_service: Arc<dyn UserService>,
    pub session_service: Arc<dyn SessionService>,
    pub booking_service: Arc<dyn BookingService>,
    pub favorite_service: Arc<dyn FavoriteService>,
    pub navigation_service: Arc<dyn NavigationService>,
    /// Shared stores, used directly by setup and health endpoints
    pub persistence: Arc<Persistence>,
}

impl AppState {
    /// Build the state on top of existing persistence.
    pub fn from_persistence(persistence: Arc<Persistence>) -> Self {
        let container = Services::from_persistence(persistence.clone());

        Self {
            ride_service: container.rides(),
            user_service: container.users(),
            session_service: container.session(),
            booking_service: container.bookings(),
            favorite_service: container.favorites(),
            navigation_service: container.navigation(),
            persistence,
        }
    }

    /// Create fresh in-memory stores, seeded with the mockup catalogue
    /// when the configuration asks for it.
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let persistence = Arc::new(Persistence::in_memory());

        if config.seed_data {
            load_mockup(persistence.as_ref()).await?;
        } else {
            tracing::info!("Seed data disabled, starting with empty stores");
        }

        Ok(Self::from_persistence(persistence))
    }

    /// Access to the raw repositories
    pub fn uow(&self) -> &dyn UnitOfWork {
        self.persistence.as_ref()
    }
}

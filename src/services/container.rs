//! Service Container - Centralized service access.
//!
//! Wires every service against one shared Unit of Work so that all of
//! them see the same in-memory stores.

use std::sync::Arc;

use super::{
    BookingManager, BookingService, FavoriteManager, FavoriteService, NavigationService,
    RideManager, RideService, ScreenNavigator, SessionManager, SessionService, UserManager,
    UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn rides(&self) -> Arc<dyn RideService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn session(&self) -> Arc<dyn SessionService>;

    fn bookings(&self) -> Arc<dyn BookingService>;

    fn favorites(&self) -> Arc<dyn FavoriteService>;

    fn navigation(&self) -> Arc<dyn NavigationService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    ride_service: Arc<dyn RideService>,
    user_service: Arc<dyn UserService>,
    session_service: Arc<dyn SessionService>,
    booking_service: Arc<dyn BookingService>,
    favorite_service: Arc<dyn FavoriteService>,
    navigation_service: Arc<dyn NavigationService>,
}

impl Services {
    /// Create service container on top of the given persistence
    pub fn from_persistence(uow: Arc<Persistence>) -> Self {
        let ride_service: Arc<dyn RideService> = Arc::new(RideManager::new(uow.clone()));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(uow.clone()));
        let session_service: Arc<dyn SessionService> =
            Arc::new(SessionManager::new(uow.clone()));
        let booking_service: Arc<dyn BookingService> =
            Arc::new(BookingManager::new(uow.clone(), session_service.clone()));
        let favorite_service: Arc<dyn FavoriteService> =
            Arc::new(FavoriteManager::new(uow, session_service.clone()));
        let navigation_service: Arc<dyn NavigationService> = Arc::new(ScreenNavigator::new(
            ride_service.clone(),
            favorite_service.clone(),
            booking_service.clone(),
            session_service.clone(),
        ));

        Self {
            ride_service,
            user_service,
            session_service,
            booking_service,
            favorite_service,
            navigation_service,
        }
    }
}

impl ServiceContainer for Services {
    fn rides(&self) -> Arc<dyn RideService> {
        self.ride_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn session(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteService> {
        self.favorite_service.clone()
    }

    fn navigation(&self) -> Arc<dyn NavigationService> {
        self.navigation_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::load_mockup;

    #[tokio::test]
    async fn test_services_share_one_store() {
        let uow = Arc::new(Persistence::in_memory());
        load_mockup(uow.as_ref()).await.unwrap();
        let services = Services::from_persistence(uow);

        services.bookings().book_ride(1).await.unwrap();
        let ride = services.rides().get_ride(1).await.unwrap();
        assert_eq!(ride.available_seats, 1);

        let booked = services.users().booked_rides(1).await.unwrap();
        assert_eq!(booked, vec![ride]);
    }
}

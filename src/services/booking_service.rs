//! Booking service - Books seats for the session user.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::SessionService;
use crate::domain::{Ride, RideId};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Book one seat for the session user.
    ///
    /// Fails with `NoSeatsAvailable` when the ride is full; nothing changes then.
    async fn book_ride(&self, ride_id: RideId) -> AppResult<Ride>;

    /// Most recently booked ride in its current state
    async fn last_booked_ride(&self) -> AppResult<Option<Ride>>;
}

/// Concrete implementation of BookingService using Unit of Work.
pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
    session: Arc<dyn SessionService>,
    last_booked: RwLock<Option<RideId>>,
}

impl<U: UnitOfWork> BookingManager<U> {
    pub fn new(uow: Arc<U>, session: Arc<dyn SessionService>) -> Self {
        Self {
            uow,
            session,
            last_booked: RwLock::new(None),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn book_ride(&self, ride_id: RideId) -> AppResult<Ride> {
        let user = self.session.current_user().await?;

        let ride = match self.uow.rides().take_seat(ride_id).await {
            Ok(ride) => ride,
            Err(e) => {
                tracing::warn!(ride = ride_id, error = %e, "Booking rejected");
                return Err(e);
            }
        };
        self.uow.users().add_booking(user.id, ride.id).await?;
        *self.last_booked.write().await = Some(ride.id);

        tracing::info!(
            ride = ride.id,
            user = user.id,
            seats_left = ride.available_seats,
            "Ride booked"
        );
        Ok(ride)
    }

    async fn last_booked_ride(&self) -> AppResult<Option<Ride>> {
        let last = *self.last_booked.read().await;
        match last {
            Some(id) => self.uow.rides().find_by_id(id).await,
            None => Ok(None),
        }
    }
}

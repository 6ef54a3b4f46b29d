//! Favorite service - The session user's favorite rides.

use async_trait::async_trait;
use std::sync::Arc;

use super::SessionService;
use crate::domain::{Ride, RideId};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Favorite service trait for dependency injection.
#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// Favorite rides of the session user, in the order they were added
    async fn favorites(&self) -> AppResult<Vec<Ride>>;

    /// Returns false when the ride already is a favorite
    async fn add_favorite(&self, ride_id: RideId) -> AppResult<bool>;

    /// Returns false when the ride was not a favorite
    async fn remove_favorite(&self, ride_id: RideId) -> AppResult<bool>;

    async fn is_favorite(&self, ride_id: RideId) -> AppResult<bool>;
}

/// Concrete implementation of FavoriteService using Unit of Work.
pub struct FavoriteManager<U: UnitOfWork> {
    uow: Arc<U>,
    session: Arc<dyn SessionService>,
}

impl<U: UnitOfWork> FavoriteManager<U> {
    pub fn new(uow: Arc<U>, session: Arc<dyn SessionService>) -> Self {
        Self { uow, session }
    }
}

#[async_trait]
impl<U: UnitOfWork> FavoriteService for FavoriteManager<U> {
    async fn favorites(&self) -> AppResult<Vec<Ride>> {
        let user = self.session.current_user().await?;
        self.uow.rides().find_by_ids(user.favorites).await
    }

    async fn add_favorite(&self, ride_id: RideId) -> AppResult<bool> {
        self.uow
            .rides()
            .find_by_id(ride_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let user = self.session.current_user().await?;
        let added = self.uow.users().add_favorite(user.id, ride_id).await?;
        tracing::debug!(ride = ride_id, user = user.id, added, "Favorite added");
        Ok(added)
    }

    async fn remove_favorite(&self, ride_id: RideId) -> AppResult<bool> {
        let user = self.session.current_user().await?;
        let removed = self.uow.users().remove_favorite(user.id, ride_id).await?;
        tracing::debug!(ride = ride_id, user = user.id, removed, "Favorite removed");
        Ok(removed)
    }

    async fn is_favorite(&self, ride_id: RideId) -> AppResult<bool> {
        Ok(self.session.current_user().await?.is_favorite(ride_id))
    }
}

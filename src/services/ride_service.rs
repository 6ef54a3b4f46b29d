//! Ride service - Browsing, searching and publishing rides.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateRide, Ride, RideId, RideSearch};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Ride service trait for dependency injection.
#[async_trait]
pub trait RideService: Send + Sync {
    /// All rides
    async fn list_rides(&self) -> AppResult<Vec<Ride>>;

    /// Rides matching origin/destination substrings; empty criteria list everything
    async fn search_rides(&self, query: RideSearch) -> AppResult<Vec<Ride>>;

    /// Get ride by ID
    async fn get_ride(&self, id: RideId) -> AppResult<Ride>;

    /// Publish a new ride
    async fn create_ride(&self, ride: CreateRide) -> AppResult<Ride>;
}

/// Concrete implementation of RideService using Unit of Work.
pub struct RideManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RideManager<U> {
    /// Create new ride service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RideService for RideManager<U> {
    async fn list_rides(&self) -> AppResult<Vec<Ride>> {
        self.uow.rides().find_all().await
    }

    async fn search_rides(&self, query: RideSearch) -> AppResult<Vec<Ride>> {
        if query.is_empty() {
            return self.list_rides().await;
        }
        tracing::debug!(from = ?query.from, to = ?query.to, "Searching rides");
        self.uow.rides().search(query).await
    }

    async fn get_ride(&self, id: RideId) -> AppResult<Ride> {
        self.uow
            .rides()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_ride(&self, ride: CreateRide) -> AppResult<Ride> {
        let ride = self.uow.rides().save(ride).await?;
        tracing::info!(ride = ride.id, route = %ride.route(), "Ride created");
        Ok(ride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockRideRepository, Persistence, UserStore};
    use mockall::predicate::eq;

    fn service_with(repo: MockRideRepository) -> RideManager<Persistence> {
        let uow = Persistence::new(Arc::new(repo), Arc::new(UserStore::new()));
        RideManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_get_ride_not_found() {
        let mut repo = MockRideRepository::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let err = service_with(repo).get_ride(42).await.unwrap_err();
        assert_eq!(err, AppError::NotFound);
    }

    #[tokio::test]
    async fn test_empty_search_lists_all_without_filtering() {
        let mut repo = MockRideRepository::new();
        repo.expect_find_all().times(1).returning(|| Ok(vec![]));
        repo.expect_search().never();

        let rides = service_with(repo)
            .search_rides(RideSearch::new(Some(String::new()), None))
            .await
            .unwrap();
        assert!(rides.is_empty());
    }

    #[tokio::test]
    async fn test_search_delegates_criteria() {
        let mut repo = MockRideRepository::new();
        repo.expect_search()
            .with(eq(RideSearch::new(Some("Ulm".into()), None)))
            .times(1)
            .returning(|_| Ok(vec![]));

        service_with(repo)
            .search_rides(RideSearch::new(Some("Ulm".into()), None))
            .await
            .unwrap();
    }
}

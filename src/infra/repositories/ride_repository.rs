//! Ride repository backed by an in-memory table.

use async_trait::async_trait;

use super::base::{Identified, Table};
use crate::domain::{CreateRide, Ride, RideId, RideSearch};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl Identified for Ride {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Ride repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RideRepository: Send + Sync {
    /// All rides in insertion order
    async fn find_all(&self) -> AppResult<Vec<Ride>>;

    /// Find ride by ID
    async fn find_by_id(&self, id: RideId) -> AppResult<Option<Ride>>;

    /// Resolve ids to rides, keeping the order of `ids` and skipping unknown ones
    async fn find_by_ids(&self, ids: Vec<RideId>) -> AppResult<Vec<Ride>>;

    /// Case-insensitive origin/destination substring search
    async fn search(&self, query: RideSearch) -> AppResult<Vec<Ride>>;

    /// Store a new ride, assigning the next id when none is requested
    async fn save(&self, ride: CreateRide) -> AppResult<Ride>;

    /// Atomically take one seat of a ride
    async fn take_seat(&self, id: RideId) -> AppResult<Ride>;

    /// Number of stored rides
    async fn count(&self) -> AppResult<usize>;
}

/// In-memory implementation of RideRepository
#[derive(Debug, Default)]
pub struct RideStore {
    rides: Table<Ride>,
}

impl RideStore {
    /// Create an empty ride store
    pub fn new() -> Self {
        Self {
            rides: Table::new(),
        }
    }
}

#[async_trait]
impl RideRepository for RideStore {
    async fn find_all(&self) -> AppResult<Vec<Ride>> {
        Ok(self.rides.all().await)
    }

    async fn find_by_id(&self, id: RideId) -> AppResult<Option<Ride>> {
        Ok(self.rides.get(id).await)
    }

    async fn find_by_ids(&self, ids: Vec<RideId>) -> AppResult<Vec<Ride>> {
        let all = self.rides.all().await;
        Ok(ids
            .iter()
            .filter_map(|id| all.iter().find(|ride| ride.id == *id).cloned())
            .collect())
    }

    async fn search(&self, query: RideSearch) -> AppResult<Vec<Ride>> {
        Ok(self.rides.filter(|ride| ride.matches(&query)).await)
    }

    async fn save(&self, ride: CreateRide) -> AppResult<Ride> {
        let requested = ride.requested_id();
        self.rides
            .insert(requested, "Ride", |id| ride.into_ride(id))
            .await
    }

    async fn take_seat(&self, id: RideId) -> AppResult<Ride> {
        self.rides
            .update(id, |ride| {
                if ride.take_seat() {
                    Ok(ride.clone())
                } else {
                    Err(AppError::NoSeatsAvailable)
                }
            })
            .await?
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.rides.len().await)
    }
}

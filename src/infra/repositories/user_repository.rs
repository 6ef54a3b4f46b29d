//! User repository backed by an in-memory table.

use async_trait::async_trait;

use super::base::{Identified, Table};
use crate::domain::{CreateUser, RideId, User, UserId};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// User repository trait for dependency injection.
///
/// Favorite and booking updates happen under the store's write lock.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Earliest stored user
    async fn first(&self) -> AppResult<Option<User>>;

    /// Store a new user, assigning the next id when none is requested
    async fn save(&self, user: CreateUser) -> AppResult<User>;

    /// Add a favorite; false when already present
    async fn add_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool>;

    /// Remove a favorite; false when absent
    async fn remove_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool>;

    /// Record a booked ride
    async fn add_booking(&self, id: UserId, ride_id: RideId) -> AppResult<()>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct UserStore {
    users: Table<User>,
}

impl UserStore {
    /// Create an empty user store
    pub fn new() -> Self {
        Self {
            users: Table::new(),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.all().await)
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(id).await)
    }

    async fn first(&self) -> AppResult<Option<User>> {
        Ok(self.users.first().await)
    }

    async fn save(&self, user: CreateUser) -> AppResult<User> {
        let requested = user.requested_id();
        self.users
            .insert(requested, "User", |id| user.into_user(id))
            .await
    }

    async fn add_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool> {
        self.users.update(id, |user| user.add_favorite(ride_id)).await
    }

    async fn remove_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool> {
        self.users
            .update(id, |user| user.remove_favorite(ride_id))
            .await
    }

    async fn add_booking(&self, id: UserId, ride_id: RideId) -> AppResult<()> {
        self.users.update(id, |user| user.add_booking(ride_id)).await
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.len().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn new_user(first_name: &str, last_name: &str) -> CreateUser {
        CreateUser {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            rating: 4.5,
        }
    }

    #[tokio::test]
    async fn test_first_is_earliest_user() {
        let store = UserStore::new();
        assert!(store.first().await.unwrap().is_none());

        store.save(new_user("Samuel", "Klefe")).await.unwrap();
        store.save(new_user("Anna", "Schmidt")).await.unwrap();

        let first = store.first().await.unwrap().unwrap();
        assert_eq!(first.full_name(), "Samuel Klefe");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_favorites_round_trip() {
        let store = UserStore::new();
        let user = store.save(new_user("Samuel", "Klefe")).await.unwrap();

        assert!(store.add_favorite(user.id, 2).await.unwrap());
        assert!(!store.add_favorite(user.id, 2).await.unwrap());
        assert!(store.add_favorite(user.id, 4).await.unwrap());
        assert_eq!(store.find_by_id(user.id).await.unwrap().unwrap().favorites, vec![2, 4]);

        assert!(store.remove_favorite(user.id, 2).await.unwrap());
        assert!(!store.remove_favorite(user.id, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_updates_on_unknown_user() {
        let store = UserStore::new();
        assert_eq!(store.add_favorite(7, 1).await, Err(AppError::NotFound));
        assert_eq!(store.add_booking(7, 1).await, Err(AppError::NotFound));
    }

    #[tokio::test]
    async fn test_add_booking_appends() {
        let store = UserStore::new();
        let user = store.save(new_user("Anna", "Schmidt")).await.unwrap();
        store.add_booking(user.id, 3).await.unwrap();
        store.add_booking(user.id, 3).await.unwrap();
        assert_eq!(
            store.find_by_id(user.id).await.unwrap().unwrap().booked_rides,
            vec![3, 3]
        );
    }
}

//! User service - Account lookups and registration.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, Ride, User, UserId};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Register a new user
    async fn create_user(&self, user: CreateUser) -> AppResult<User>;

    /// Rides booked by a user; an unknown user has none
    async fn booked_rides(&self, id: UserId) -> AppResult<Vec<Ride>>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().find_all().await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        let user = self.uow.users().save(user).await?;
        tracing::info!(user = user.id, "User created");
        Ok(user)
    }

    async fn booked_rides(&self, id: UserId) -> AppResult<Vec<Ride>> {
        match self.uow.users().find_by_id(id).await? {
            Some(user) => self.uow.rides().find_by_ids(user.booked_rides).await,
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{load_mockup, run_setup, Persistence};

    async fn seeded() -> UserManager<Persistence> {
        let uow = Arc::new(Persistence::in_memory());
        load_mockup(uow.as_ref()).await.unwrap();
        run_setup(uow.as_ref()).await.unwrap();
        UserManager::new(uow)
    }

    #[tokio::test]
    async fn test_booked_rides_of_passenger() {
        let service = seeded().await;
        let rides = service.booked_rides(4).await.unwrap();
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].route(), "Ulm - Augsburg");
    }

    #[tokio::test]
    async fn test_booked_rides_of_unknown_user_is_empty() {
        let service = seeded().await;
        assert!(service.booked_rides(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let service = seeded().await;
        assert_eq!(service.get_user(999).await.unwrap_err(), AppError::NotFound);
    }

    #[tokio::test]
    async fn test_create_user_assigns_next_id() {
        let service = seeded().await;
        let user = service
            .create_user(CreateUser {
                id: None,
                first_name: "Erika".into(),
                last_name: "Mustermann".into(),
                rating: 3.5,
            })
            .await
            .unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(service.list_users().await.unwrap().len(), 5);
    }
}

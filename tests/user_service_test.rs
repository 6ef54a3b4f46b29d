//! User service tests against a mocked user repository.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::{mock, predicate::eq};

use car_sharing::domain::{CreateUser, RideId, User, UserId};
use car_sharing::errors::{AppError, AppResult};
use car_sharing::infra::{Persistence, RideStore, UserRepository};
use car_sharing::services::{UserManager, UserService};

mock! {
    pub Users {}

    #[async_trait]
    impl UserRepository for Users {
        async fn find_all(&self) -> AppResult<Vec<User>>;
        async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;
        async fn first(&self) -> AppResult<Option<User>>;
        async fn save(&self, user: CreateUser) -> AppResult<User>;
        async fn add_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool>;
        async fn remove_favorite(&self, id: UserId, ride_id: RideId) -> AppResult<bool>;
        async fn add_booking(&self, id: UserId, ride_id: RideId) -> AppResult<()>;
        async fn count(&self) -> AppResult<usize>;
    }
}

fn create_test_user(id: UserId) -> User {
    User::new(id, "Anna", "Schmidt", 4.9)
}

fn service(repo: MockUsers) -> UserManager<Persistence> {
    let uow = Persistence::new(Arc::new(RideStore::new()), Arc::new(repo));
    UserManager::new(Arc::new(uow))
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(create_test_user(id))));

    let user = service(repo).get_user(3).await.unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.initials(), "AS");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_user(42).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut repo = MockUsers::new();
    repo.expect_find_all()
        .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

    let users = service(repo).list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_create_user_propagates_conflict() {
    let mut repo = MockUsers::new();
    repo.expect_save()
        .times(1)
        .returning(|_| Err(AppError::conflict("User 1")));

    let request = CreateUser {
        id: Some(1),
        first_name: "Samuel".to_string(),
        last_name: "Klefe".to_string(),
        rating: 4.8,
    };
    let err = service(repo).create_user(request).await.unwrap_err();
    assert_eq!(err, AppError::conflict("User 1"));
}

#[tokio::test]
async fn test_booked_rides_skips_unknown_ride_ids() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_id().with(eq(3)).returning(|id| {
        let mut user = create_test_user(id);
        user.add_booking(9);
        Ok(Some(user))
    });

    // The ride store is empty, so the booking does not resolve
    let rides = service(repo).booked_rides(3).await.unwrap();
    assert!(rides.is_empty());
}

//! Session service - The simulated logged-in user.
//!
//! There is no authentication: the session user is the first stored user.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Session summary for the screen header
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionInfo {
    pub logged_in: bool,
    #[schema(example = "SK")]
    pub initials: String,
    pub user: UserResponse,
}

/// Session service trait for dependency injection.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// The logged-in user
    async fn current_user(&self) -> AppResult<User>;

    /// Initials of the logged-in user, e.g. "SK"
    async fn current_user_initials(&self) -> AppResult<String> {
        Ok(self.current_user().await?.initials())
    }

    /// True while any user exists
    async fn is_logged_in(&self) -> AppResult<bool>;

    async fn session_info(&self) -> AppResult<SessionInfo> {
        let user = self.current_user().await?;
        Ok(SessionInfo {
            logged_in: true,
            initials: user.initials(),
            user: UserResponse::from(user),
        })
    }
}

/// Concrete implementation of SessionService using Unit of Work.
pub struct SessionManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> SessionManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SessionService for SessionManager<U> {
    async fn current_user(&self) -> AppResult<User> {
        self.uow.users().first().await?.ok_or(AppError::NoSession)
    }

    async fn is_logged_in(&self) -> AppResult<bool> {
        Ok(self.uow.users().first().await?.is_some())
    }
}

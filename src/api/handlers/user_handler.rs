//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateUser, Ride, UserId, UserResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
        .route("/:id/bookedRides", get(booked_rides))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User ID already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Rides booked by a user; unknown users have none
#[utoipa::path(
    get,
    path = "/users/{id}/bookedRides",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Booked rides", body = Vec<Ride>)
    )
)]
pub async fn booked_rides(
    State(state): State<AppState>,
    PathParam(id): PathParam<UserId>,
) -> AppResult<Json<Vec<Ride>>> {
    let rides = state.user_service.booked_rides(id).await?;
    Ok(Json(rides))
}

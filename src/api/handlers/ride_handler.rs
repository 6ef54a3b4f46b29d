//! Ride handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateRide, Ride, RideId, RideSearch};
use crate::errors::AppResult;
use crate::types::Created;

/// Create ride routes
pub fn ride_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rides).post(create_ride))
        .route("/:id", get(get_ride))
        .route("/:id/book", post(book_ride))
}

/// List rides, optionally filtered by origin and destination
#[utoipa::path(
    get,
    path = "/rides",
    tag = "Rides",
    params(RideSearch),
    responses(
        (status = 200, description = "Matching rides", body = Vec<Ride>)
    )
)]
pub async fn list_rides(
    State(state): State<AppState>,
    Query(query): Query<RideSearch>,
) -> AppResult<Json<Vec<Ride>>> {
    let rides = state.ride_service.search_rides(query).await?;
    Ok(Json(rides))
}

/// Publish a new ride
#[utoipa::path(
    post,
    path = "/rides",
    tag = "Rides",
    request_body = CreateRide,
    responses(
        (status = 201, description = "Ride created", body = Ride),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Ride ID already taken")
    )
)]
pub async fn create_ride(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRide>,
) -> AppResult<Created<Ride>> {
    let ride = state.ride_service.create_ride(payload).await?;
    Ok(Created(ride))
}

/// Get ride by ID
#[utoipa::path(
    get,
    path = "/rides/{id}",
    tag = "Rides",
    params(
        ("id" = u64, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride found", body = Ride),
        (status = 404, description = "Ride not found")
    )
)]
pub async fn get_ride(
    State(state): State<AppState>,
    PathParam(id): PathParam<RideId>,
) -> AppResult<Json<Ride>> {
    let ride = state.ride_service.get_ride(id).await?;
    Ok(Json(ride))
}

/// Book one seat for the session user
#[utoipa::path(
    post,
    path = "/rides/{id}/book",
    tag = "Rides",
    params(
        ("id" = u64, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride booked, seats updated", body = Ride),
        (status = 401, description = "No session user"),
        (status = 404, description = "Ride not found"),
        (status = 409, description = "No seats available")
    )
)]
pub async fn book_ride(
    State(state): State<AppState>,
    PathParam(id): PathParam<RideId>,
) -> AppResult<Json<Ride>> {
    let ride = state.booking_service.book_ride(id).await?;
    Ok(Json(ride))
}

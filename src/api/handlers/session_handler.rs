//! Session and booking handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::Ride;
use crate::errors::{AppResult, OptionExt};
use crate::services::SessionInfo;

/// Create session routes
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/", get(current_session))
}

/// Create booking routes
pub fn bookings_routes() -> Router<AppState> {
    Router::new().route("/last", get(last_booking))
}

/// Simulated logged-in user
#[utoipa::path(
    get,
    path = "/session",
    tag = "Session",
    responses(
        (status = 200, description = "Current session", body = SessionInfo),
        (status = 401, description = "No users stored")
    )
)]
pub async fn current_session(State(state): State<AppState>) -> AppResult<Json<SessionInfo>> {
    let info = state.session_service.session_info().await?;
    Ok(Json(info))
}

/// Most recently booked ride
#[utoipa::path(
    get,
    path = "/bookings/last",
    tag = "Session",
    responses(
        (status = 200, description = "Last booked ride", body = Ride),
        (status = 404, description = "Nothing booked yet")
    )
)]
pub async fn last_booking(State(state): State<AppState>) -> AppResult<Json<Ride>> {
    let ride = state
        .booking_service
        .last_booked_ride()
        .await?
        .ok_or_not_found()?;
    Ok(Json(ride))
}

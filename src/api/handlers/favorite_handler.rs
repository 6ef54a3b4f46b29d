//! Favorite handlers for the session user.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::PathParam;
use crate::api::AppState;
use crate::domain::{Ride, RideId};
use crate::errors::AppResult;
use crate::types::FavoriteStatus;

/// Create favorite routes
pub fn favorite_routes() -> Router<AppState> {
    Router::new().route("/", get(list_favorites)).route(
        "/:ride_id",
        get(favorite_status)
            .put(add_favorite)
            .delete(remove_favorite),
    )
}

/// Favorite rides of the session user
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "Favorites",
    responses(
        (status = 200, description = "Favorite rides in the order they were added", body = Vec<Ride>),
        (status = 401, description = "No session user")
    )
)]
pub async fn list_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Ride>>> {
    let rides = state.favorite_service.favorites().await?;
    Ok(Json(rides))
}

/// Mark a ride as favorite
#[utoipa::path(
    put,
    path = "/favorites/{ride_id}",
    tag = "Favorites",
    params(
        ("ride_id" = u64, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride is a favorite", body = FavoriteStatus),
        (status = 401, description = "No session user"),
        (status = 404, description = "Ride not found")
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    PathParam(ride_id): PathParam<RideId>,
) -> AppResult<Json<FavoriteStatus>> {
    let changed = state.favorite_service.add_favorite(ride_id).await?;
    Ok(Json(FavoriteStatus {
        ride_id,
        favorite: true,
        changed,
    }))
}

/// Remove a ride from the favorites
#[utoipa::path(
    delete,
    path = "/favorites/{ride_id}",
    tag = "Favorites",
    params(
        ("ride_id" = u64, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride is not a favorite", body = FavoriteStatus),
        (status = 401, description = "No session user")
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    PathParam(ride_id): PathParam<RideId>,
) -> AppResult<Json<FavoriteStatus>> {
    let changed = state.favorite_service.remove_favorite(ride_id).await?;
    Ok(Json(FavoriteStatus {
        ride_id,
        favorite: false,
        changed,
    }))
}

/// Whether a ride is a favorite
#[utoipa::path(
    get,
    path = "/favorites/{ride_id}",
    tag = "Favorites",
    params(
        ("ride_id" = u64, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Favorite membership", body = FavoriteStatus),
        (status = 401, description = "No session user")
    )
)]
pub async fn favorite_status(
    State(state): State<AppState>,
    PathParam(ride_id): PathParam<RideId>,
) -> AppResult<Json<FavoriteStatus>> {
    let favorite = state.favorite_service.is_favorite(ride_id).await?;
    Ok(Json(FavoriteStatus {
        ride_id,
        favorite,
        changed: false,
    }))
}

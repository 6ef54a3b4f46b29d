//! Screen navigation handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::NavigateTo;
use crate::errors::AppResult;
use crate::services::Screen;

/// Create screen routes
pub fn screen_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(current_screen))
        .route("/navigate", post(navigate))
        .route("/back", post(go_back))
}

/// Screen currently shown
#[utoipa::path(
    get,
    path = "/screens",
    tag = "Screens",
    responses(
        (status = 200, description = "Current screen", body = Screen),
        (status = 401, description = "No session user")
    )
)]
pub async fn current_screen(State(state): State<AppState>) -> AppResult<Json<Screen>> {
    let screen = state.navigation_service.current().await?;
    Ok(Json(screen))
}

/// Switch to another screen
#[utoipa::path(
    post,
    path = "/screens/navigate",
    tag = "Screens",
    request_body = NavigateTo,
    responses(
        (status = 200, description = "New screen", body = Screen),
        (status = 400, description = "Ride details without a ride"),
        (status = 404, description = "Ride not found")
    )
)]
pub async fn navigate(
    State(state): State<AppState>,
    ValidatedJson(target): ValidatedJson<NavigateTo>,
) -> AppResult<Json<Screen>> {
    let screen = state.navigation_service.navigate(target).await?;
    Ok(Json(screen))
}

/// Go back to the previous screen
#[utoipa::path(
    post,
    path = "/screens/back",
    tag = "Screens",
    responses(
        (status = 200, description = "Screen reached by going back", body = Screen)
    )
)]
pub async fn go_back(State(state): State<AppState>) -> AppResult<Json<Screen>> {
    let screen = state.navigation_service.back().await?;
    Ok(Json(screen))
}

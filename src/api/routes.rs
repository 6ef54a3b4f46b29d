//! Application route configuration.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    bookings_routes, favorite_routes, ride_routes, screen_routes, session_routes, setup_routes,
    user_routes,
};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppResult;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/setup", setup_routes())
        .nest("/rides", ride_routes())
        .nest("/users", user_routes())
        .nest("/session", session_routes())
        .nest("/bookings", bookings_routes())
        .nest("/favorites", favorite_routes())
        .nest("/screens", screen_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Car Sharing"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    rides: usize,
    users: usize,
}

/// Health check endpoint reporting store sizes
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let uow = state.uow();
    Ok(Json(HealthResponse {
        status: "healthy",
        rides: uow.rides().count().await?,
        users: uow.users().count().await?,
    }))
}

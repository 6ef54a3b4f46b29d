//! Setup handler - Inserts the demo dataset.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::config::SETUP_COMPLETED_MESSAGE;
use crate::errors::AppResult;
use crate::infra::run_setup;
use crate::types::MessageResponse;

/// Create setup routes
pub fn setup_routes() -> Router<AppState> {
    Router::new().route("/", get(setup).post(setup))
}

/// Insert three users and three rides, one of them booked by the passenger
#[utoipa::path(
    post,
    path = "/setup",
    tag = "Setup",
    responses(
        (status = 200, description = "Setup data created", body = MessageResponse)
    )
)]
pub async fn setup(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let summary = run_setup(state.uow()).await?;
    tracing::debug!(users = summary.users, rides = summary.rides, "Setup finished");
    Ok(Json(MessageResponse::new(SETUP_COMPLETED_MESSAGE)))
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RideId;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Setup completed! Created 3 users and 3 rides.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Favorite membership of a ride after a request
#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteStatus {
    #[schema(example = 2)]
    pub ride_id: RideId,
    pub favorite: bool,
    /// Whether the request changed the favorites list
    pub changed: bool,
}

/// Created response helper: 201 with the entity as body
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_status() {
        let response = Created(MessageResponse::new("ok")).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_favorite_status_json() {
        let json = serde_json::to_value(FavoriteStatus {
            ride_id: 4,
            favorite: true,
            changed: false,
        })
        .unwrap();
        assert_eq!(json["ride_id"], 4);
        assert_eq!(json["favorite"], true);
        assert_eq!(json["changed"], false);
    }
}

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    favorite_handler, ride_handler, screen_handler, session_handler, setup_handler, user_handler,
};
use crate::domain::{CreateRide, CreateUser, NavigateTo, Ride, UserResponse, ViewType};
use crate::services::{Screen, SessionInfo};
use crate::types::{FavoriteStatus, MessageResponse};

/// OpenAPI documentation for the Car Sharing API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Sharing",
        version = "0.1.0",
        description = "Find, favorite and book shared rides",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        setup_handler::setup,
        // Ride endpoints
        ride_handler::list_rides,
        ride_handler::create_ride,
        ride_handler::get_ride,
        ride_handler::book_ride,
        // User endpoints
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::booked_rides,
        // Session endpoints
        session_handler::current_session,
        session_handler::last_booking,
        // Favorite endpoints
        favorite_handler::list_favorites,
        favorite_handler::add_favorite,
        favorite_handler::remove_favorite,
        favorite_handler::favorite_status,
        // Screen endpoints
        screen_handler::current_screen,
        screen_handler::navigate,
        screen_handler::go_back,
    ),
    components(
        schemas(
            // Domain types
            Ride,
            CreateRide,
            UserResponse,
            CreateUser,
            ViewType,
            NavigateTo,
            // Service types
            SessionInfo,
            Screen,
            // Response types
            FavoriteStatus,
            MessageResponse,
        )
    ),
    tags(
        (name = "Setup", description = "Demo data"),
        (name = "Rides", description = "Browse, publish and book rides"),
        (name = "Users", description = "User management operations"),
        (name = "Session", description = "Simulated logged-in user"),
        (name = "Favorites", description = "Favorite rides of the session user"),
        (name = "Screens", description = "Navigation between the app screens")
    )
)]
pub struct ApiDoc;

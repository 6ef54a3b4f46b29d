//! HTTP request handlers.

pub mod favorite_handler;
pub mod ride_handler;
pub mod screen_handler;
pub mod session_handler;
pub mod setup_handler;
pub mod user_handler;

pub use favorite_handler::favorite_routes;
pub use ride_handler::ride_routes;
pub use screen_handler::screen_routes;
pub use session_handler::{bookings_routes, session_routes};
pub use setup_handler::setup_routes;
pub use user_handler::user_routes;

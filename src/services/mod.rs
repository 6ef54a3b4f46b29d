//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach the stores through the Unit of Work.

mod booking_service;
pub mod container;
mod favorite_service;
mod navigation_service;
mod ride_service;
mod session_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use booking_service::{BookingManager, BookingService};
pub use favorite_service::{FavoriteManager, FavoriteService};
pub use navigation_service::{NavigationService, Screen, ScreenContent, ScreenNavigator};
pub use ride_service::{RideManager, RideService};
pub use session_service::{SessionInfo, SessionManager, SessionService};
pub use user_service::{UserManager, UserService};

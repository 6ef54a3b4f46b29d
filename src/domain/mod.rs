//! Domain layer - Core business entities and logic
//!
//! Entities (`Ride`, `User`), their request DTOs, and the screen
//! navigation state machine. No infrastructure concerns live here.

pub mod navigation;
pub mod ride;
pub mod user;

pub use navigation::{NavigateTo, Navigator, ViewType};
pub use ride::{CreateRide, Ride, RideId, RideSearch};
pub use user::{CreateUser, User, UserId, UserResponse};

//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::ride::RideId;

/// User identifier
pub type UserId = u64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Samuel")]
    pub first_name: String,
    #[schema(example = "Klefe")]
    pub last_name: String,
    /// Rating between 1.0 and 5.0
    #[schema(example = 4.5)]
    pub rating: f64,
    /// Favorite ride ids, no duplicates
    #[serde(default)]
    pub favorites: Vec<RideId>,
    /// Ride ids booked by this user
    #[serde(default)]
    pub booked_rides: Vec<RideId>,
}

impl User {
    /// Create a user without favorites or bookings
    pub fn new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating,
            favorites: Vec::new(),
            booked_rides: Vec::new(),
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Upper-cased initials, e.g. "SK" for Samuel Klefe
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_favorite(&self, ride_id: RideId) -> bool {
        self.favorites.contains(&ride_id)
    }

    /// Add a favorite. Returns false if it was already there.
    pub fn add_favorite(&mut self, ride_id: RideId) -> bool {
        if self.is_favorite(ride_id) {
            return false;
        }
        self.favorites.push(ride_id);
        true
    }

    /// Remove a favorite. Returns false if it was not there.
    pub fn remove_favorite(&mut self, ride_id: RideId) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|id| *id != ride_id);
        self.favorites.len() != before
    }

    pub fn add_booking(&mut self, ride_id: RideId) {
        self.booked_rides.push(ride_id);
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Explicit id; omitted or 0 assigns the next free id
    #[serde(default)]
    pub id: Option<UserId>,
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Anna")]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Schmidt")]
    pub last_name: String,
    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1.0 and 5.0"))]
    #[schema(example = 4.9)]
    pub rating: f64,
}

impl CreateUser {
    /// Requested id, treating 0 as "assign one"
    pub fn requested_id(&self) -> Option<UserId> {
        self.id.filter(|id| *id != 0)
    }

    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.first_name, self.last_name, self.rating)
    }
}

/// User response with derived display fields
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Samuel")]
    pub first_name: String,
    #[schema(example = "Klefe")]
    pub last_name: String,
    #[schema(example = "Samuel Klefe")]
    pub full_name: String,
    #[schema(example = "SK")]
    pub initials: String,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub favorites: Vec<RideId>,
    pub booked_rides: Vec<RideId>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            initials: user.initials(),
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            rating: user.rating,
            favorites: user.favorites,
            booked_rides: user.booked_rides,
        }
    }
}

//! Ride domain entity and related types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Ride identifier
pub type RideId = u64;

/// A trip offered by a driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ride {
    #[schema(example = 1)]
    pub id: RideId,
    #[schema(example = "Max Mustermann")]
    pub driver_name: String,
    #[schema(example = "Ulm")]
    pub origin: String,
    #[schema(example = "Köln")]
    pub destination: String,
    #[schema(example = 449)]
    pub distance_km: u32,
    #[schema(value_type = String, example = "2025-10-27")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "05:00:00")]
    pub time: NaiveTime,
    #[schema(example = 2)]
    pub available_seats: u32,
    /// Driver rating in stars (1-5)
    #[schema(example = 4)]
    pub driver_rating: u8,
}

impl Ride {
    /// Route as shown in ride lists, e.g. "Ulm - Köln"
    pub fn route(&self) -> String {
        format!("{} - {}", self.origin, self.destination)
    }

    /// Check if at least one seat can still be booked
    pub fn has_free_seats(&self) -> bool {
        self.available_seats > 0
    }

    /// Take one seat. Returns false and leaves the ride untouched when full.
    pub fn take_seat(&mut self) -> bool {
        match self.available_seats.checked_sub(1) {
            Some(remaining) => {
                self.available_seats = remaining;
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on origin and destination.
    ///
    /// Empty or missing criteria match every ride. Criteria are used as
    /// given, so surrounding whitespace is part of the substring.
    pub fn matches(&self, query: &RideSearch) -> bool {
        contains_ignore_case(&self.origin, query.from.as_deref())
            && contains_ignore_case(&self.destination, query.to.as_deref())
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Ride search criteria (query string of `GET /rides`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RideSearch {
    /// Origin substring
    pub from: Option<String>,
    /// Destination substring
    pub to: Option<String>,
}

impl RideSearch {
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        Self { from, to }
    }

    /// True when neither criterion narrows the result
    pub fn is_empty(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
        blank(&self.from) && blank(&self.to)
    }
}

/// Ride creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRide {
    /// Explicit id; omitted or 0 assigns the next free id
    #[serde(default)]
    pub id: Option<RideId>,
    #[validate(length(min = 1, message = "Driver name is required"))]
    #[schema(example = "Samuel Klefe")]
    pub driver_name: String,
    #[validate(length(min = 1, message = "Origin is required"))]
    #[schema(example = "Neu-Ulm")]
    pub origin: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    #[schema(example = "München")]
    pub destination: String,
    #[schema(example = 150)]
    pub distance_km: u32,
    #[schema(value_type = String, example = "2026-01-25")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "14:30:00")]
    pub time: NaiveTime,
    #[schema(example = 3)]
    pub available_seats: u32,
    #[validate(range(min = 1, max = 5, message = "Driver rating must be between 1 and 5"))]
    #[schema(example = 5)]
    pub driver_rating: u8,
}

impl CreateRide {
    /// Requested id, treating 0 as "assign one"
    pub fn requested_id(&self) -> Option<RideId> {
        self.id.filter(|id| *id != 0)
    }

    /// Build the entity once an id is known
    pub fn into_ride(self, id: RideId) -> Ride {
        Ride {
            id,
            driver_name: self.driver_name,
            origin: self.origin,
            destination: self.destination,
            distance_km: self.distance_km,
            date: self.date,
            time: self.time,
            available_seats: self.available_seats,
            driver_rating: self.driver_rating,
        }
    }
}

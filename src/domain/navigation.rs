//! Screen navigation between the five app views.
//!
//! The navigator only tracks where the user is and where "back" leads.
//! Screen content is assembled by the navigation service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::ride::{RideId, RideSearch};
use crate::config::WINDOW_TITLE_PREFIX;
use crate::errors::{AppError, AppResult};

/// App views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    FindRide,
    Favorites,
    AvailableRides,
    RideDetails,
    BookingConfirmation,
}

impl ViewType {
    pub fn title(&self) -> &'static str {
        match self {
            ViewType::FindRide => "Find a Ride",
            ViewType::Favorites => "Favorite Rides",
            ViewType::AvailableRides => "Available Rides",
            ViewType::RideDetails => "Ride Details",
            ViewType::BookingConfirmation => "Booking Confirmation",
        }
    }

    /// Window title, e.g. "Car Sharing - Find a Ride"
    pub fn window_title(&self) -> String {
        format!("{} - {}", WINDOW_TITLE_PREFIX, self.title())
    }

    /// Where "back" leads once this view is shown, given the view it was opened from.
    pub fn back_target(&self, opened_from: ViewType) -> ViewType {
        match self {
            ViewType::RideDetails if opened_from == ViewType::Favorites => ViewType::Favorites,
            ViewType::RideDetails | ViewType::BookingConfirmation => ViewType::AvailableRides,
            ViewType::FindRide | ViewType::Favorites | ViewType::AvailableRides => {
                ViewType::FindRide
            }
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Navigation request (`POST /screens/navigate`)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NavigateTo {
    pub view: ViewType,
    /// Required for `ride_details`
    #[validate(range(min = 1, message = "ride_id must be at least 1"))]
    #[schema(example = 2)]
    pub ride_id: Option<RideId>,
    /// Origin filter for `available_rides`
    #[schema(example = "Ulm")]
    pub from: Option<String>,
    /// Destination filter for `available_rides`
    #[schema(example = "Frankfurt")]
    pub to: Option<String>,
}

impl NavigateTo {
    pub fn view(view: ViewType) -> Self {
        Self {
            view,
            ride_id: None,
            from: None,
            to: None,
        }
    }

    pub fn ride(ride_id: RideId) -> Self {
        Self {
            ride_id: Some(ride_id),
            ..Self::view(ViewType::RideDetails)
        }
    }

    pub fn search(from: Option<String>, to: Option<String>) -> Self {
        Self {
            from,
            to,
            ..Self::view(ViewType::AvailableRides)
        }
    }
}

/// Per-session navigation state
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    current: ViewType,
    back_to: ViewType,
    /// Ride shown by the details view
    ride_id: Option<RideId>,
    /// Criteria of the last search, reused when going back to the results
    search: RideSearch,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the find-ride screen
    pub fn new() -> Self {
        Self {
            current: ViewType::FindRide,
            back_to: ViewType::FindRide,
            ride_id: None,
            search: RideSearch::default(),
        }
    }

    pub fn current(&self) -> ViewType {
        self.current
    }

    pub fn back_to(&self) -> ViewType {
        self.back_to
    }

    pub fn ride_id(&self) -> Option<RideId> {
        self.ride_id
    }

    pub fn search(&self) -> &RideSearch {
        &self.search
    }

    /// Move to another view.
    ///
    /// # Errors
    /// `BadRequest` when the details view is requested without a ride.
    pub fn navigate(&mut self, request: NavigateTo) -> AppResult<ViewType> {
        match request.view {
            ViewType::RideDetails => {
                let ride_id = request
                    .ride_id
                    .ok_or_else(|| AppError::BadRequest("ride_id is required".to_string()))?;
                self.ride_id = Some(ride_id);
            }
            ViewType::AvailableRides => {
                self.search = RideSearch::new(request.from, request.to);
            }
            _ => {}
        }

        self.enter(request.view);
        Ok(self.current)
    }

    /// Go to the back target of the current view, keeping the last search and ride.
    pub fn back(&mut self) -> ViewType {
        let target = self.back_to;
        self.enter(target);
        target
    }

    fn enter(&mut self, view: ViewType) {
        self.back_to = view.back_target(self.current);
        self.current = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_request_validation() {
        assert!(NavigateTo::ride(2).validate().is_ok());
        assert!(NavigateTo::view(ViewType::Favorites).validate().is_ok());
        assert!(NavigateTo::ride(0).validate().is_err());
    }

    #[test]
    fn test_titles() {
        assert_eq!(ViewType::FindRide.window_title(), "Car Sharing - Find a Ride");
        assert_eq!(
            ViewType::BookingConfirmation.window_title(),
            "Car Sharing - Booking Confirmation"
        );
    }

    #[test]
    fn test_starts_on_find_ride() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ViewType::FindRide);
        assert_eq!(nav.back_to(), ViewType::FindRide);
    }

    #[test]
    fn test_search_then_details_then_back() {
        let mut nav = Navigator::new();
        nav.navigate(NavigateTo::search(Some("Ulm".into()), None)).unwrap();
        assert_eq!(nav.back_to(), ViewType::FindRide);

        nav.navigate(NavigateTo::ride(2)).unwrap();
        assert_eq!(nav.current(), ViewType::RideDetails);
        assert_eq!(nav.back_to(), ViewType::AvailableRides);

        assert_eq!(nav.back(), ViewType::AvailableRides);
        assert_eq!(nav.search().from.as_deref(), Some("Ulm"));
        assert_eq!(nav.back(), ViewType::FindRide);
    }

    #[test]
    fn test_details_opened_from_favorites_goes_back_to_favorites() {
        let mut nav = Navigator::new();
        nav.navigate(NavigateTo::view(ViewType::Favorites)).unwrap();
        nav.navigate(NavigateTo::ride(4)).unwrap();
        assert_eq!(nav.back_to(), ViewType::Favorites);
        assert_eq!(nav.back(), ViewType::Favorites);
        assert_eq!(nav.back_to(), ViewType::FindRide);
    }

    #[test]
    fn test_confirmation_goes_back_to_results() {
        let mut nav = Navigator::new();
        nav.navigate(NavigateTo::ride(1)).unwrap();
        nav.navigate(NavigateTo::view(ViewType::BookingConfirmation))
            .unwrap();
        assert_eq!(nav.back(), ViewType::AvailableRides);
    }

    #[test]
    fn test_details_requires_ride() {
        let mut nav = Navigator::new();
        let err = nav
            .navigate(NavigateTo::view(ViewType::RideDetails))
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(nav.current(), ViewType::FindRide);
    }

    #[test]
    fn test_view_type_serde() {
        let json = serde_json::to_string(&ViewType::AvailableRides).unwrap();
        assert_eq!(json, "\"available_rides\"");
        let parsed: ViewType = serde_json::from_str("\"ride_details\"").unwrap();
        assert_eq!(parsed, ViewType::RideDetails);
    }
}

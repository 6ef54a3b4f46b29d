//! Navigation service - Builds the screen the session user is looking at.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::ToSchema;

use super::{BookingService, FavoriteService, RideService, SessionService};
use crate::domain::{NavigateTo, Navigator, Ride, ViewType};
use crate::errors::{AppError, AppResult};

/// Data shown by a screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenContent {
    FindRide {},
    AvailableRides { rides: Vec<Ride> },
    Favorites { rides: Vec<Ride> },
    RideDetails { ride: Ride, is_favorite: bool },
    BookingConfirmation { ride: Option<Ride> },
}

/// A rendered screen
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Screen {
    pub view: ViewType,
    #[schema(example = "Car Sharing - Find a Ride")]
    pub title: String,
    /// Initials shown in the header
    #[schema(example = "SK")]
    pub user_initials: String,
    /// View reached by going back
    pub back_to: ViewType,
    /// Tagged by `kind`: the view name in snake case
    #[schema(value_type = Object)]
    pub content: ScreenContent,
}

/// Navigation service trait for dependency injection.
#[async_trait]
pub trait NavigationService: Send + Sync {
    /// Screen currently shown
    async fn current(&self) -> AppResult<Screen>;

    /// Move to another screen
    async fn navigate(&self, target: NavigateTo) -> AppResult<Screen>;

    /// Go back to the previous screen
    async fn back(&self) -> AppResult<Screen>;
}

/// Concrete implementation of NavigationService holding one navigator per process.
pub struct ScreenNavigator {
    rides: Arc<dyn RideService>,
    favorites: Arc<dyn FavoriteService>,
    bookings: Arc<dyn BookingService>,
    session: Arc<dyn SessionService>,
    navigator: Mutex<Navigator>,
}

impl ScreenNavigator {
    pub fn new(
        rides: Arc<dyn RideService>,
        favorites: Arc<dyn FavoriteService>,
        bookings: Arc<dyn BookingService>,
        session: Arc<dyn SessionService>,
    ) -> Self {
        Self {
            rides,
            favorites,
            bookings,
            session,
            navigator: Mutex::new(Navigator::new()),
        }
    }

    async fn render(&self, nav: &Navigator) -> AppResult<Screen> {
        let view = nav.current();
        let content = match view {
            ViewType::FindRide => ScreenContent::FindRide {},
            ViewType::AvailableRides => ScreenContent::AvailableRides {
                rides: self.rides.search_rides(nav.search().clone()).await?,
            },
            ViewType::Favorites => ScreenContent::Favorites {
                rides: self.favorites.favorites().await?,
            },
            ViewType::RideDetails => {
                let ride_id = nav
                    .ride_id()
                    .ok_or_else(|| AppError::BadRequest("no ride selected".to_string()))?;
                ScreenContent::RideDetails {
                    ride: self.rides.get_ride(ride_id).await?,
                    is_favorite: self.favorites.is_favorite(ride_id).await?,
                }
            }
            ViewType::BookingConfirmation => ScreenContent::BookingConfirmation {
                ride: self.bookings.last_booked_ride().await?,
            },
        };

        Ok(Screen {
            view,
            title: view.window_title(),
            user_initials: self.session.current_user_initials().await?,
            back_to: nav.back_to(),
            content,
        })
    }
}

#[async_trait]
impl NavigationService for ScreenNavigator {
    async fn current(&self) -> AppResult<Screen> {
        let nav = self.navigator.lock().await;
        self.render(&nav).await
    }

    async fn navigate(&self, target: NavigateTo) -> AppResult<Screen> {
        let mut nav = self.navigator.lock().await;

        // Render on a copy so a failing screen (e.g. unknown ride) leaves the state untouched
        let mut next = nav.clone();
        next.navigate(target)?;
        let screen = self.render(&next).await?;
        *nav = next;

        tracing::debug!(view = %screen.view, "Navigated");
        Ok(screen)
    }

    async fn back(&self) -> AppResult<Screen> {
        let mut nav = self.navigator.lock().await;
        let mut next = nav.clone();
        next.back();
        let screen = self.render(&next).await?;
        *nav = next;
        Ok(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{load_mockup, Persistence};
    use crate::services::{BookingManager, FavoriteManager, RideManager, SessionManager};

    async fn navigator() -> (ScreenNavigator, Arc<dyn BookingService>) {
        let uow = Arc::new(Persistence::in_memory());
        load_mockup(uow.as_ref()).await.unwrap();

        let session: Arc<dyn SessionService> = Arc::new(SessionManager::new(uow.clone()));
        let rides: Arc<dyn RideService> = Arc::new(RideManager::new(uow.clone()));
        let favorites: Arc<dyn FavoriteService> =
            Arc::new(FavoriteManager::new(uow.clone(), session.clone()));
        let bookings: Arc<dyn BookingService> =
            Arc::new(BookingManager::new(uow, session.clone()));

        (
            ScreenNavigator::new(rides, favorites, bookings.clone(), session),
            bookings,
        )
    }

    #[tokio::test]
    async fn test_initial_screen() {
        let (nav, _) = navigator().await;
        let screen = nav.current().await.unwrap();
        assert_eq!(screen.view, ViewType::FindRide);
        assert_eq!(screen.title, "Car Sharing - Find a Ride");
        assert_eq!(screen.user_initials, "SK");
    }

    #[tokio::test]
    async fn test_search_results_screen() {
        let (nav, _) = navigator().await;
        let screen = nav
            .navigate(NavigateTo::search(Some("ulm".into()), Some("frankfurt".into())))
            .await
            .unwrap();
        match screen.content {
            ScreenContent::AvailableRides { rides } => assert_eq!(rides.len(), 3),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_details_then_confirmation() {
        let (nav, bookings) = navigator().await;

        let screen = nav.navigate(NavigateTo::ride(2)).await.unwrap();
        match &screen.content {
            ScreenContent::RideDetails { ride, is_favorite } => {
                assert_eq!(ride.driver_name, "Thomas Schmidt");
                assert!(*is_favorite);
            }
            other => panic!("unexpected content: {:?}", other),
        }

        bookings.book_ride(2).await.unwrap();
        let screen = nav
            .navigate(NavigateTo::view(ViewType::BookingConfirmation))
            .await
            .unwrap();
        match screen.content {
            ScreenContent::BookingConfirmation { ride: Some(ride) } => {
                assert_eq!(ride.available_seats, 2)
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let back = nav.back().await.unwrap();
        assert_eq!(back.view, ViewType::AvailableRides);
    }

    #[tokio::test]
    async fn test_unknown_ride_keeps_current_screen() {
        let (nav, _) = navigator().await;
        nav.navigate(NavigateTo::view(ViewType::Favorites))
            .await
            .unwrap();

        let err = nav.navigate(NavigateTo::ride(99)).await.unwrap_err();
        assert_eq!(err, AppError::NotFound);
        assert_eq!(nav.current().await.unwrap().view, ViewType::Favorites);
    }
}

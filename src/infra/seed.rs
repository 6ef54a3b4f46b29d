//! Seed data: the mockup catalogue loaded at startup and the
//! dataset inserted by the setup endpoint.

use chrono::{NaiveDate, NaiveTime};

use super::UnitOfWork;
use crate::domain::{CreateRide, CreateUser, RideId, UserId};
use crate::errors::{AppError, AppResult};

/// Drivers whose rides start out as the session user's favorites
const DEFAULT_FAVORITE_DRIVERS: &[&str] = &["Thomas Schmidt", "Erika Mustermann"];

/// Id of the simulated session user
pub const SESSION_USER_ID: UserId = 1;

/// Counts of what a seeding run inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub rides: usize,
}

struct RideRow {
    id: Option<RideId>,
    driver: &'static str,
    origin: &'static str,
    destination: &'static str,
    distance_km: u32,
    date: (i32, u32, u32),
    time: (u32, u32),
    seats: u32,
    rating: u8,
}

impl RideRow {
    fn into_request(self) -> AppResult<CreateRide> {
        let (year, month, day) = self.date;
        let (hour, minute) = self.time;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::internal(format!("invalid seed date {:?}", self.date)))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| AppError::internal(format!("invalid seed time {:?}", self.time)))?;

        Ok(CreateRide {
            id: self.id,
            driver_name: self.driver.to_string(),
            origin: self.origin.to_string(),
            destination: self.destination.to_string(),
            distance_km: self.distance_km,
            date,
            time,
            available_seats: self.seats,
            driver_rating: self.rating,
        })
    }
}

fn mockup_rides() -> Vec<RideRow> {
    let row = |id, driver, origin, destination, distance_km, time, seats, rating| RideRow {
        id: Some(id),
        driver,
        origin,
        destination,
        distance_km,
        date: (2025, 10, 27),
        time,
        seats,
        rating,
    };

    vec![
        row(1, "Max Mustermann", "Ulm", "Köln", 449, (5, 0), 2, 4),
        row(2, "Thomas Schmidt", "Ulm", "Frankfurt", 287, (6, 30), 3, 4),
        row(3, "John Smith", "Munich", "Köln", 573, (7, 0), 1, 4),
        row(4, "Erika Mustermann", "Ulm", "Frankfurt", 287, (8, 0), 2, 3),
        row(5, "Hannes Müller", "Ulm", "Frankfurt", 287, (9, 0), 4, 1),
        row(6, "Anna Johnson", "Augsburg", "Frankfurt", 360, (10, 0), 2, 5),
    ]
}

fn user(id: Option<UserId>, first_name: &str, last_name: &str, rating: f64) -> CreateUser {
    CreateUser {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        rating,
    }
}

/// Load the mockup catalogue: six rides, the session user Samuel Klefe,
/// and his default favorites.
///
/// # Errors
/// `Conflict` if any of the fixed ids is already taken.
pub async fn load_mockup(uow: &dyn UnitOfWork) -> AppResult<SeedSummary> {
    let rides = uow.rides();
    let users = uow.users();

    let session_user = users
        .save(user(Some(SESSION_USER_ID), "Samuel", "Klefe", 4.5))
        .await?;

    let mut inserted = 0;
    for row in mockup_rides() {
        let ride = rides.save(row.into_request()?).await?;
        if DEFAULT_FAVORITE_DRIVERS.contains(&ride.driver_name.as_str()) {
            users.add_favorite(session_user.id, ride.id).await?;
        }
        inserted += 1;
    }

    tracing::info!(rides = inserted, "Mockup catalogue loaded");

    Ok(SeedSummary {
        users: 1,
        rides: inserted,
    })
}

/// Insert the setup dataset: three users, two open rides and one full
/// ride already booked by the passenger. Ids are assigned by the stores.
pub async fn run_setup(uow: &dyn UnitOfWork) -> AppResult<SeedSummary> {
    let rides = uow.rides();
    let users = uow.users();

    users.save(user(None, "Samuel", "Klefe", 4.8)).await?;
    users.save(user(None, "Max", "Mustermann", 4.5)).await?;
    let passenger = users.save(user(None, "Anna", "Schmidt", 4.9)).await?;

    let setup_rides = vec![
        RideRow {
            id: None,
            driver: "Samuel Klefe",
            origin: "Neu-Ulm",
            destination: "München",
            distance_km: 150,
            date: (2026, 1, 25),
            time: (14, 30),
            seats: 3,
            rating: 5,
        },
        RideRow {
            id: None,
            driver: "Max Mustermann",
            origin: "Stuttgart",
            destination: "Berlin",
            distance_km: 630,
            date: (2026, 1, 26),
            time: (9, 0),
            seats: 2,
            rating: 4,
        },
    ];
    for row in setup_rides {
        rides.save(row.into_request()?).await?;
    }

    let booked = rides
        .save(
            RideRow {
                id: None,
                driver: "Samuel Klefe",
                origin: "Ulm",
                destination: "Augsburg",
                distance_km: 80,
                date: (2026, 1, 20),
                time: (10, 0),
                seats: 0,
                rating: 5,
            }
            .into_request()?,
        )
        .await?;
    users.add_booking(passenger.id, booked.id).await?;

    tracing::info!(passenger = passenger.id, ride = booked.id, "Setup data created");

    Ok(SeedSummary { users: 3, rides: 3 })
}

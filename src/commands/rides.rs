//! Rides command - Prints the mockup catalogue to the terminal.

use std::sync::Arc;

use crate::cli::args::{RidesAction, RidesArgs};
use crate::domain::{Ride, RideSearch};
use crate::errors::AppResult;
use crate::infra::{load_mockup, Persistence};
use crate::services::{RideManager, RideService};

/// Execute the rides command
pub async fn execute(args: RidesArgs) -> AppResult<()> {
    let persistence = Arc::new(Persistence::in_memory());
    load_mockup(persistence.as_ref()).await?;
    let service = RideManager::new(persistence);

    let rides = match args.action {
        RidesAction::List => service.list_rides().await?,
        RidesAction::Search { from, to } => {
            service.search_rides(RideSearch::new(from, to)).await?
        }
    };

    if rides.is_empty() {
        println!("No rides found");
        return Ok(());
    }

    for ride in &rides {
        println!("{}", format_ride(ride));
    }
    tracing::debug!(count = rides.len(), "Rides listed");

    Ok(())
}

/// One table row per ride
fn format_ride(ride: &Ride) -> String {
    format!(
        "#{:<3} {:<28} {} {} {:>4} km  {:<18} {} seat(s)  {}",
        ride.id,
        ride.route(),
        ride.date.format("%d.%m.%Y"),
        ride.time.format("%H:%M"),
        ride.distance_km,
        ride.driver_name,
        ride.available_seats,
        "★".repeat(ride.driver_rating as usize),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_format_ride() {
        let ride = Ride {
            id: 2,
            driver_name: "Thomas Schmidt".to_string(),
            origin: "Ulm".to_string(),
            destination: "Frankfurt".to_string(),
            distance_km: 287,
            date: NaiveDate::from_ymd_opt(2025, 10, 27).unwrap(),
            time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            available_seats: 3,
            driver_rating: 4,
        };
        let row = format_ride(&ride);
        assert!(row.starts_with("#2"));
        assert!(row.contains("Ulm - Frankfurt"));
        assert!(row.contains("27.10.2025 06:30"));
        assert!(row.contains("287 km"));
        assert!(row.ends_with("★★★★"));
    }
}

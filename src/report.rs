//! Dashboard report assembly
//!
//! Pulls one reading, classifies it, and resolves the map coordinate into a
//! single bundle of plain values for the presentation layer. Fetch and
//! resolve failures degrade the report instead of failing it.

use tracing::{debug, warn};

use crate::api::AqiApiClient;
use crate::classify::{SeverityTier, Tint};
use crate::error::AirSightError;
use crate::locations;
use crate::models::{AqiReading, Location};

/// Display-ready air quality report for one city
#[derive(Debug, Clone)]
pub struct CityAirReport {
    /// City name as queried
    pub city: String,
    /// The reading, absent when the fetch failed
    pub reading: Option<AqiReading>,
    /// Severity tier, absent when the reading is absent
    pub tier: Option<SeverityTier>,
    /// Display tint; neutral when the reading is absent
    pub tint: Tint,
    /// Map marker coordinate, absent when the city is not in the table
    pub coordinate: Option<Location>,
    /// User-visible messages explaining any degradation
    pub problems: Vec<String>,
}

/// Build the report for one city.
///
/// Never fails: every fetch or resolve error becomes a message in
/// `problems` and the corresponding field stays absent.
pub fn build_report(client: &AqiApiClient, city: &str) -> CityAirReport {
    let mut problems = Vec::new();

    let reading = match client.fetch_city_aqi(city) {
        Ok(reading) => Some(reading),
        Err(err) => {
            warn!("Fetch failed for '{}': {}", city, err);
            problems.push(err.user_message());
            None
        }
    };

    let (tier, tint) = match &reading {
        Some(reading) => {
            let tier = SeverityTier::from_index(reading.aqi);
            (Some(tier), tier.tint())
        }
        None => (None, Tint::Neutral),
    };

    let coordinate = locations::resolve(city);
    if coordinate.is_none() {
        let err = AirSightError::unresolved_location(city);
        debug!("{}", err);
        problems.push(err.user_message());
    }

    CityAirReport {
        city: city.to_string(),
        reading,
        tier,
        tint,
        coordinate,
        problems,
    }
}

//! `AirSight` - city air quality dashboard core
//!
//! This library fetches a city-level Air Quality Index from the WAQI feed,
//! classifies it into one of six severity tiers with a display tint, and
//! resolves the city to a fixed map coordinate. The binary in this crate
//! renders the result as text; richer presentation layers consume the same
//! plain values.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod locations;
pub mod models;
pub mod report;

// Re-export core types for public API
pub use api::AqiApiClient;
pub use classify::{SeverityTier, Tint};
pub use config::AirSightConfig;
pub use error::AirSightError;
pub use models::{AqiReading, Location};
pub use report::{CityAirReport, build_report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirSightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

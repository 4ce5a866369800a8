//! Air quality reading model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One air quality index observation, scoped to the query that produced it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AqiReading {
    /// Air Quality Index value
    pub aqi: u32,
    /// Name of the reporting station, when the feed provides one
    pub station: Option<String>,
    /// Observation time reported by the feed, when parseable
    pub observed_at: Option<DateTime<Utc>>,
}

impl AqiReading {
    /// Create a reading carrying only the index value
    #[must_use]
    pub fn new(aqi: u32) -> Self {
        Self {
            aqi,
            station: None,
            observed_at: None,
        }
    }
}

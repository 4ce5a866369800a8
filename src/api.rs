//! AQI feed client for WAQI integration
//!
//! This module provides HTTP client functionality for retrieving city-level
//! air quality readings from the WAQI feed API with timeout handling and
//! error translation.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::AirSightConfig;
use crate::error::AirSightError;
use crate::models::AqiReading;

/// AQI feed client for WAQI
#[derive(Debug)]
pub struct AqiApiClient {
    /// HTTP client
    client: Client,
    /// Feed base URL, without a trailing slash
    base_url: String,
    /// Access token appended to every feed request
    token: String,
}

impl AqiApiClient {
    /// Create a new AQI feed client
    pub fn new(config: AirSightConfig) -> crate::Result<Self> {
        let token = config
            .api
            .token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AirSightError::config(
                    "No API token configured. Set api.token in config.toml or the \
                     AIRSIGHT_API__TOKEN environment variable.",
                )
            })?;

        let timeout = Duration::from_secs(config.api.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("AirSight/0.1.0")
            .build()
            .map_err(|e| AirSightError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetch the current AQI reading for a city.
    ///
    /// One blocking GET against the feed endpoint. Transport failures,
    /// upstream-reported failures, and success payloads missing the numeric
    /// index each map to their own error variant; the caller decides how to
    /// degrade. Repeated calls are independent.
    #[instrument(skip(self))]
    pub fn fetch_city_aqi(&self, city: &str) -> crate::Result<AqiReading> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AirSightError::validation("city name cannot be empty"));
        }

        // Token stays out of log output.
        debug!("Requesting {}/feed/{}/", self.base_url, city);
        let start_time = Instant::now();

        let url = format!(
            "{}/feed/{}/?token={}",
            self.base_url,
            urlencoding::encode(city),
            self.token
        );

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AirSightError::transport(format!(
                "air quality API returned HTTP {status}"
            )));
        }

        let payload: waqi::FeedResponse = response
            .json()
            .map_err(|e| AirSightError::malformed(format!("could not decode feed payload: {e}")))?;

        let total_duration = start_time.elapsed();
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow feed response: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        match payload.status.as_str() {
            "ok" => {
                let measurement = match payload.data {
                    Some(waqi::FeedPayload::Measurement(measurement)) => measurement,
                    _ => {
                        return Err(AirSightError::malformed(
                            "feed reported success but carried no measurement data",
                        ));
                    }
                };

                let reading = measurement.into_reading().ok_or_else(|| {
                    AirSightError::malformed(
                        "feed reported success but the aqi field is missing or not numeric",
                    )
                })?;

                info!(
                    "AQI {} for '{}' in {:.3}s",
                    reading.aqi,
                    city,
                    total_duration.as_secs_f64()
                );

                Ok(reading)
            }
            other => {
                let message = match payload.data {
                    Some(waqi::FeedPayload::Message(message)) => message,
                    _ => format!("feed answered with status '{other}'"),
                };
                warn!("Feed rejected request for '{}': {}", city, message);
                Err(AirSightError::upstream(message))
            }
        }
    }
}

/// WAQI feed response structures and conversion utilities
mod waqi {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use crate::models::AqiReading;

    /// Top-level feed response from WAQI
    #[derive(Debug, Deserialize)]
    pub struct FeedResponse {
        pub status: String,
        #[serde(default)]
        pub data: Option<FeedPayload>,
    }

    /// The `data` field is a measurement object on success and a plain
    /// message string when the feed reports an error.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum FeedPayload {
        Measurement(FeedMeasurement),
        Message(String),
    }

    /// Measurement object from WAQI
    #[derive(Debug, Deserialize)]
    pub struct FeedMeasurement {
        /// Numeric index normally; the feed sends "-" for stations
        /// currently without data
        #[serde(default)]
        pub aqi: Option<serde_json::Value>,
        #[serde(default)]
        pub city: Option<FeedCity>,
        #[serde(default)]
        pub time: Option<FeedTime>,
    }

    /// Reporting station metadata from WAQI
    #[derive(Debug, Deserialize)]
    pub struct FeedCity {
        #[serde(default)]
        pub name: Option<String>,
    }

    /// Observation time metadata from WAQI
    #[derive(Debug, Deserialize)]
    pub struct FeedTime {
        #[serde(default)]
        pub iso: Option<String>,
    }

    impl FeedMeasurement {
        /// Convert a feed measurement into a reading.
        ///
        /// Returns `None` when the index field is missing or not a
        /// non-negative integer. Station and timestamp metadata are carried
        /// when present and silently dropped when not parseable.
        #[must_use]
        pub fn into_reading(self) -> Option<AqiReading> {
            let aqi = self
                .aqi
                .as_ref()
                .and_then(serde_json::Value::as_u64)
                .and_then(|value| u32::try_from(value).ok())?;

            let station = self.city.and_then(|city| city.name);
            let observed_at = self
                .time
                .and_then(|time| time.iso)
                .and_then(|iso| DateTime::parse_from_rfc3339(&iso).ok())
                .map(|dt| dt.with_timezone(&Utc));

            Some(AqiReading {
                aqi,
                station,
                observed_at,
            })
        }
    }
}

/// Canned-response HTTP listener for exercising the client against a
/// simulated upstream.
#[cfg(test)]
pub(crate) mod test_server {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve `count` identical canned HTTP responses on an ephemeral port,
    /// returning the base URL to point the client at.
    pub(crate) fn serve(count: usize, status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        thread::spawn(move || {
            for _ in 0..count {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    /// Serve a single canned response.
    pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> String {
        serve(1, status_line, body)
    }

    /// A base URL with nothing listening behind it.
    pub(crate) fn refused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener addr");
        drop(listener);
        format!("http://{addr}")
    }
}

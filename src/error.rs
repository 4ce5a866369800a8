//! Error types and handling for the `AirSight` dashboard core

use thiserror::Error;

/// Main error type for the `AirSight` crate
#[derive(Error, Debug)]
pub enum AirSightError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network, DNS, timeout, or HTTP-level failures
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The upstream API answered with a failure status
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// The upstream API reported success but the payload shape was wrong
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// No coordinate entry for the requested city
    #[error("Unresolved location: {city}")]
    UnresolvedLocation { city: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AirSightError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new unresolved-location error
    pub fn unresolved_location<S: Into<String>>(city: S) -> Self {
        Self::UnresolvedLocation { city: city.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirSightError::Config { .. } => {
                "Configuration error. Please check your config file and API token.".to_string()
            }
            AirSightError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AirSightError::Transport { .. } => {
                "Unable to reach the air quality service. Please check your internet connection."
                    .to_string()
            }
            AirSightError::Upstream { message } => {
                format!("The air quality service reported a problem: {message}")
            }
            AirSightError::MalformedResponse { .. } => {
                "The air quality service returned data we could not understand.".to_string()
            }
            AirSightError::UnresolvedLocation { city } => {
                format!(
                    "No map coordinates known for '{city}'. Showing the reading without a map marker."
                )
            }
            AirSightError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for AirSightError {
    fn from(err: reqwest::Error) -> Self {
        AirSightError::Transport {
            message: err.to_string(),
        }
    }
}

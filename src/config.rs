//! Configuration management for the `AirSight` dashboard
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AirSightError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AirSight` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirSightConfig {
    /// Upstream AQI feed configuration
    #[serde(default)]
    pub api: AqiApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream AQI feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiApiConfig {
    /// WAQI API token (required for live queries)
    pub token: Option<String>,
    /// Base URL for the AQI feed API
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_api_base_url() -> String {
    "https://api.waqi.info".to_string()
}

fn default_api_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for AqiApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_api_base_url(),
            timeout_seconds: default_api_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for AirSightConfig {
    fn default() -> Self {
        Self {
            api: AqiApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AirSightConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with AIRSIGHT_ prefix,
        // e.g. AIRSIGHT_API__TOKEN maps to api.token
        builder = builder
            .add_source(Environment::with_prefix("AIRSIGHT").prefix_separator("_").separator("__"));

        let config = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let settings: AirSightConfig = config
            .try_deserialize()
            .with_context(|| "Failed to parse configuration")?;

        Ok(settings)
    }

    /// Default platform config path (`<config dir>/airsight/config.toml`)
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airsight").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_token()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the API token, when one is configured
    pub fn validate_token(&self) -> Result<()> {
        if let Some(token) = &self.api.token {
            if token.is_empty() {
                return Err(AirSightError::config(
                    "API token cannot be empty if provided. Either remove it or provide a valid token.",
                )
                .into());
            }

            if token.len() > 100 {
                return Err(AirSightError::config(
                    "API token appears to be invalid (too long). Please check your token.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 {
            return Err(AirSightError::config("Request timeout must be at least 1 second").into());
        }

        if self.api.timeout_seconds > 300 {
            return Err(AirSightError::config("Request timeout cannot exceed 300 seconds").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirSightError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirSightError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(
                AirSightError::config("AQI API base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AirSightConfig::default();
        assert_eq!(config.api.base_url, "https://api.waqi.info");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.api.token.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_validates() {
        // The token is optional at validation time; the client requires it
        // only when a live query is made.
        let config = AirSightConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_token() {
        let mut config = AirSightConfig::default();
        config.api.token = Some(String::new());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("token cannot be empty"));
    }

    #[test]
    fn test_validation_accepts_plausible_token() {
        let mut config = AirSightConfig::default();
        config.api.token = Some("9194074afb7a02d71d038fa2a8120c73".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_invalid_log_level() {
        let mut config = AirSightConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_validation_rejects_timeout_out_of_range() {
        let mut config = AirSightConfig::default();
        config.api.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let mut config = AirSightConfig::default();
        config.api.base_url = "ftp://api.waqi.info".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = AirSightConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("airsight"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}

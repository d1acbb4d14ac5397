//! Configuration management for the `AirChat` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::airports::DEFAULT_DATASET_URL;
use crate::AirChatError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AirChat` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirChatConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Live flight provider settings
    #[serde(default)]
    pub flights: FlightsConfig,
    /// Airport reference dataset settings
    #[serde(default)]
    pub airports: AirportsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the chat API on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Live flight provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightsConfig {
    /// Provider API key (AviationStack access key)
    pub api_key: Option<String>,
    /// Base URL for the flight data API
    #[serde(default = "default_flights_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_flights_timeout")]
    pub timeout_seconds: u32,
}

/// Airport reference dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportsConfig {
    /// URL of the 14-column airport dataset fetched at startup
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,
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
fn default_server_port() -> u16 {
    8080
}

fn default_flights_base_url() -> String {
    "https://api.aviationstack.com/v1".to_string()
}

fn default_flights_timeout() -> u32 {
    30
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for FlightsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_flights_base_url(),
            timeout_seconds: default_flights_timeout(),
        }
    }
}

impl Default for AirportsConfig {
    fn default() -> Self {
        Self {
            dataset_url: default_dataset_url(),
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

impl Default for AirChatConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            flights: FlightsConfig::default(),
            airports: AirportsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AirChatConfig {
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

        // Add environment variable overrides with AIRCHAT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("AIRCHAT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: AirChatConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("airchat").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // The flight API key is optional; without one the provider will
        // reject requests and the assistant reports that to the user.
        if let Some(api_key) = &self.flights.api_key {
            if api_key.is_empty() {
                return Err(AirChatError::config(
                    "Flight API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(AirChatError::config(
                    "Flight API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.flights.timeout_seconds == 0 {
            return Err(
                AirChatError::config("Flight API timeout must be greater than zero").into(),
            );
        }

        if self.flights.timeout_seconds > 300 {
            return Err(
                AirChatError::config("Flight API timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AirChatError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AirChatError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (label, url) in [
            ("Flight API base URL", &self.flights.base_url),
            ("Airport dataset URL", &self.airports.dataset_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AirChatError::config(format!(
                    "{label} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AirChatConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.flights.base_url, "https://api.aviationstack.com/v1");
        assert_eq!(config.flights.timeout_seconds, 30);
        assert!(config.flights.api_key.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.airports.dataset_url.contains("airports.dat"));
    }

    #[test]
    fn test_default_config_validates() {
        let config = AirChatConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = AirChatConfig::default();
        config.flights.api_key = Some("short".to_string());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AirChatConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AirChatConfig::default();
        config.flights.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AirChatConfig::default();
        config.airports.dataset_url = "ftp://example.com/airports.dat".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = AirChatConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("airchat"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}

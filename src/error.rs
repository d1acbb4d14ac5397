//! Error types and handling for the `AirChat` application

use thiserror::Error;

/// Main error type for the `AirChat` application
#[derive(Error, Debug)]
pub enum AirChatError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// External API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Reference dataset errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl AirChatError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AirChatError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            AirChatError::Api { .. } => {
                "Unable to reach external flight data services. Please check your internet connection."
                    .to_string()
            }
            AirChatError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AirChatError::Dataset { .. } => {
                "The airport reference dataset could not be loaded.".to_string()
            }
            AirChatError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            AirChatError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AirChatError::config("missing API key");
        assert!(matches!(config_err, AirChatError::Config { .. }));

        let api_err = AirChatError::api("connection failed");
        assert!(matches!(api_err, AirChatError::Api { .. }));

        let validation_err = AirChatError::validation("empty message");
        assert!(matches!(validation_err, AirChatError::Validation { .. }));

        let dataset_err = AirChatError::dataset("bad row");
        assert!(matches!(dataset_err, AirChatError::Dataset { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AirChatError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = AirChatError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = AirChatError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let chat_err: AirChatError = io_err.into();
        assert!(matches!(chat_err, AirChatError::Io { .. }));
    }
}

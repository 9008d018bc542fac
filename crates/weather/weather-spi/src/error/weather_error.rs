//! Weather error types.

use thiserror::Error;

/// Weather source errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body is not a JSON document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider answered with a non-success status code
    #[error("API error [{code}]: {message}")]
    ApiError { code: String, message: String },

    /// Required field absent or of the wrong type
    #[error("Missing field in weather response: {0}")]
    MissingField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for weather operations.
pub type Result<T> = std::result::Result<T, WeatherError>;

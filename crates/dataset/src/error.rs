//! Ingestion error types.

use thiserror::Error;

/// Error type for data loading operations.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Failed to parse CSV at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("Failed to parse JSON: {0}")]
    Json(String),

    #[error("Non-finite temperature at line {line}: {value}")]
    InvalidTemperature { line: u64, value: f64 },

    #[error("Empty season label at line {line}")]
    EmptySeason { line: u64 },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("No observations found")]
    Empty,
}

/// Result type for ingestion.
pub type Result<T> = std::result::Result<T, LoadError>;

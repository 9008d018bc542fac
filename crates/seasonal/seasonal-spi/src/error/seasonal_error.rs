//! Seasonal baseline error types.

use thiserror::Error;

use crate::model::Season;

/// Seasonal baseline errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeasonalError {
    /// The requested season has no entry in the baseline.
    #[error("Season not found in baseline: {season}")]
    SeasonNotFound { season: Season },

    #[error("No observations supplied")]
    EmptyObservations,
}

/// Result type for seasonal baseline operations.
pub type Result<T> = std::result::Result<T, SeasonalError>;

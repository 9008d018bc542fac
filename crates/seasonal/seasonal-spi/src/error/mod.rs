//! Error types for seasonal baselines.
//!
//! This module contains the error type and the Result alias.

mod seasonal_error;

pub use seasonal_error::{Result, SeasonalError};

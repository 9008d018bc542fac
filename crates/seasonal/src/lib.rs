//! # seasonal
//!
//! Seasonal baseline module for seasonwatch.
//! Computes per-season temperature statistics for a city, flags anomalous
//! observations, and classifies live readings against the baseline.

pub use seasonal_facade::*;

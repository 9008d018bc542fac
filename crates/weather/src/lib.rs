//! # weather
//!
//! Current-weather lookup for seasonwatch.
//! Validates provider responses at the boundary so only typed readings reach
//! the classifier.

pub use weather_facade::*;

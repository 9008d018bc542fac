//! Weather Source Service Provider Interface
//!
//! Defines traits and types for fetching the current weather of a city.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::WeatherSource;
pub use error::{Result, WeatherError};
pub use model::CurrentWeather;

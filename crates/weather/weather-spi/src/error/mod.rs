//! Error types for weather sources.

mod weather_error;

pub use weather_error::{Result, WeatherError};

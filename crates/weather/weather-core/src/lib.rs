//! Weather Source Core
//!
//! Implementations for weather sources.

pub mod openweather;

pub use openweather::{parse_current_weather, OpenWeatherMap, DEFAULT_ERROR_MESSAGE};

//! Weather API
//!
//! Configuration types and builders for weather sources.

mod config;

// Re-export SPI types
pub use weather_spi::{CurrentWeather, Result, WeatherError};

pub use config::{WeatherConfig, WeatherConfigBuilder, DEFAULT_BASE_URL};

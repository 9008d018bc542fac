//! Weather Source Facade
//!
//! Unified re-exports for the weather module.
//!
//! This facade provides a single entry point for all weather functionality:
//! - `weather_spi` - `WeatherSource` trait, `CurrentWeather` and `WeatherError`
//! - `weather_api` - `WeatherConfig` and its builder
//! - `weather_core` - the OpenWeatherMap client and response validation
//!
//! # Example
//!
//! ```rust,ignore
//! use weather_facade::{OpenWeatherMap, WeatherConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = OpenWeatherMap::new(WeatherConfig::from_env().unwrap()).unwrap();
//!     let current = client.fetch("Moscow").await.unwrap();
//!     println!("{}°C", current.temperature);
//! }
//! ```

// Re-export everything from SPI
pub use weather_spi::*;

// Re-export everything from API
pub use weather_api::*;

// Re-export everything from Core
pub use weather_core::*;

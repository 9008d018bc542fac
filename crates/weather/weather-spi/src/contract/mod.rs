//! Contract definitions for weather sources.

mod weather_source;

pub use weather_source::WeatherSource;

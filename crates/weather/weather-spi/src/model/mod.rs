//! Data models for weather sources.

mod current;

pub use current::CurrentWeather;

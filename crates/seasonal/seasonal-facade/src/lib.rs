//! Seasonal Baseline Facade
//!
//! Unified re-exports for the seasonal baseline module.
//!
//! This facade provides a single entry point to all seasonal functionality:
//! - Models, `SeasonalError` and the `BaselineComputer` / `LiveClassifier` traits from SPI
//! - Classifier configuration from API
//! - `SeasonalBaselineComputer`, `LiveAnomalyClassifier` and `describe` from Core

// Re-export everything from SPI
pub use seasonal_spi::*;

// Re-export everything from API
pub use seasonal_api::*;

// Re-export everything from Core
pub use seasonal_core::*;

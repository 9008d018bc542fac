//! Historical temperature ingestion for seasonwatch
//!
//! Reads city temperature tables from CSV or JSON into [`Observation`]s and
//! provides the city selection the dashboard performs before analysis.

mod error;
mod loader;
mod select;

pub use error::{LoadError, Result};
pub use loader::{load, load_csv, load_json, read_csv, read_json, REQUIRED_COLUMNS};
pub use select::{cities, for_city};

pub use seasonal_spi::Observation;

//! Seasonal Baseline Core
//!
//! Implementations for seasonal baselines, row annotation, live
//! classification and descriptive statistics.

mod annotate;
mod baseline;
mod classifier;
mod rule;
mod summary;

pub use annotate::*;
pub use baseline::*;
pub use classifier::*;
pub use rule::*;
pub use summary::*;

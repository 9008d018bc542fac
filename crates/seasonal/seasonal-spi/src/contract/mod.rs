//! Contract definitions for seasonal baselines.
//!
//! This module contains trait definitions that providers must implement.

mod baseline_computer;
mod live_classifier;

pub use baseline_computer::BaselineComputer;
pub use live_classifier::LiveClassifier;

//! Live reading and verdict types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Season;

/// A single exogenous temperature reading to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveReading {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    pub season: Season,
}

impl LiveReading {
    pub fn new(temperature: f64, season: impl Into<Season>) -> Self {
        Self {
            temperature,
            season: season.into(),
        }
    }
}

/// Outcome of classifying a live reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Within `mean ± 2·std` for the season.
    Normal,
    /// Outside `mean ± 2·std` for the season.
    Anomalous,
    /// The season has no variance estimate (a single historical sample).
    Indeterminate,
}

impl Verdict {
    pub fn is_anomalous(&self) -> bool {
        matches!(self, Verdict::Anomalous)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Normal => "normal",
            Verdict::Anomalous => "anomalous",
            Verdict::Indeterminate => "indeterminate",
        };
        f.pad(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_reading_new() {
        let reading = LiveReading::new(22.5, "summer");
        assert_eq!(reading.temperature, 22.5);
        assert_eq!(reading.season, Season::summer());
    }

    #[test]
    fn test_verdict_serde() {
        assert_eq!(serde_json::to_string(&Verdict::Anomalous).unwrap(), "\"anomalous\"");
        let verdict: Verdict = serde_json::from_str("\"indeterminate\"").unwrap();
        assert_eq!(verdict, Verdict::Indeterminate);
    }

    #[test]
    fn test_verdict_is_anomalous() {
        assert!(Verdict::Anomalous.is_anomalous());
        assert!(!Verdict::Normal.is_anomalous());
        assert!(!Verdict::Indeterminate.is_anomalous());
    }
}

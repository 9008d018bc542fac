//! Seasonal baseline types.

use std::collections::btree_map::{self, BTreeMap};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::Season;

/// Statistics of one season's temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation. `None` when the season has a single sample.
    #[serde(default, deserialize_with = "deserialize_std")]
    pub std: Option<f64>,
    /// Number of observations in the season.
    #[serde(default)]
    pub count: usize,
}

impl SeasonStats {
    pub fn new(mean: f64, std: Option<f64>, count: usize) -> Self {
        Self { mean, std, count }
    }

    /// Whether a variance estimate exists for this season.
    pub fn has_variance(&self) -> bool {
        self.std.is_some()
    }
}

/// A negative or NaN deviation would invert the anomaly band.
fn deserialize_std<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(std) if std.is_nan() || std < 0.0 => Err(D::Error::custom(format!(
            "std must be a non-negative number, got {}",
            std
        ))),
        std => Ok(std),
    }
}

/// Per-season statistics for one city, keyed by season label.
///
/// Only seasons present in the source data have an entry. Iteration follows
/// the lexical order of the labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalBaseline {
    entries: BTreeMap<Season, SeasonStats>,
}

impl SeasonalBaseline {
    /// Create an empty baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the statistics for a season.
    pub fn insert(&mut self, season: Season, stats: SeasonStats) -> Option<SeasonStats> {
        self.entries.insert(season, stats)
    }

    pub fn get(&self, season: &Season) -> Option<&SeasonStats> {
        self.entries.get(season)
    }

    pub fn contains(&self, season: &Season) -> bool {
        self.entries.contains_key(season)
    }

    /// Number of seasons with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seasons with an entry, in lexical order.
    pub fn seasons(&self) -> impl Iterator<Item = &Season> {
        self.entries.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Season, SeasonStats> {
        self.entries.iter()
    }
}

impl FromIterator<(Season, SeasonStats)> for SeasonalBaseline {
    fn from_iter<I: IntoIterator<Item = (Season, SeasonStats)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SeasonalBaseline {
    type Item = (&'a Season, &'a SeasonStats);
    type IntoIter = btree_map::Iter<'a, Season, SeasonStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Season labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical season label used to partition observations.
///
/// Labels are compared exactly. The four canonical labels are offered by
/// selectors, but any label found in the data forms its own group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    /// Canonical labels in selector order.
    pub const CANONICAL: [&'static str; 4] = ["winter", "spring", "summer", "autumn"];

    /// Create a season from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn winter() -> Self {
        Self::new("winter")
    }

    pub fn spring() -> Self {
        Self::new("spring")
    }

    pub fn summer() -> Self {
        Self::new("summer")
    }

    pub fn autumn() -> Self {
        Self::new("autumn")
    }

    /// The four canonical seasons, winter first.
    pub fn canonical() -> Vec<Season> {
        Self::CANONICAL.iter().map(|label| Self::new(*label)).collect()
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the four canonical labels.
    pub fn is_canonical(&self) -> bool {
        Self::CANONICAL.contains(&self.0.as_str())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Season {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Season {
    fn from(label: String) -> Self {
        Self(label)
    }
}

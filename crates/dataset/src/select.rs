//! City selection over a loaded table.

use std::collections::HashSet;

use seasonal_spi::Observation;

/// Distinct cities in order of first appearance.
pub fn cities(observations: &[Observation]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::new();
    for observation in observations {
        if seen.insert(observation.city.as_str()) {
            ordered.push(observation.city.clone());
        }
    }
    ordered
}

/// Rows for one city, in their original order.
pub fn for_city(observations: &[Observation], city: &str) -> Vec<Observation> {
    observations
        .iter()
        .filter(|observation| observation.city == city)
        .cloned()
        .collect()
}

//! End-to-end tests for the seasonal crate
//!
//! Tests the complete dashboard workflow: one city's history is reduced to a
//! baseline, anomalies are highlighted, and a live reading is checked.

use seasonal::{
    annotate, compute_baseline, ClassifierConfig, LiveAnomalyClassifier, LiveClassifier,
    LiveReading, Observation, Season, SeasonalError, Verdict,
};

fn history() -> Vec<Observation> {
    let mut data = Vec::new();
    for year in 2010..2020 {
        for (season, base) in [("winter", -4.0), ("spring", 8.0), ("summer", 19.0), ("autumn", 9.0)] {
            for day in 0..10 {
                let t = base + ((year + day) % 4) as f64 * 0.75;
                data.push(Observation::new("Warsaw", format!("{}-{}-{}", year, season, day), t, season));
            }
        }
    }
    // Heat wave and cold snap
    data.push(Observation::new("Warsaw", "2015-summer-heat", 36.0, "summer"));
    data.push(Observation::new("Warsaw", "2012-winter-snap", -25.0, "winter"));
    data
}

#[test]
fn e2e_history_to_highlighted_anomalies() {
    let data = history();
    let baseline = compute_baseline(&data);
    assert_eq!(baseline.len(), 4);

    let annotated = annotate(&data, &baseline).unwrap();
    assert_eq!(annotated.len(), data.len());

    let highlighted: Vec<&str> = annotated
        .anomalies()
        .map(|row| row.observation.timestamp.as_str())
        .collect();
    assert_eq!(highlighted, vec!["2015-summer-heat", "2012-winter-snap"]);
}

#[test]
fn e2e_live_check_for_each_selector_season() {
    let baseline = compute_baseline(&history());
    let classifier = LiveAnomalyClassifier::default();

    for season in Season::canonical() {
        let mean = baseline.get(&season).unwrap().mean;
        let verdict = classifier
            .classify(&LiveReading::new(mean, season.clone()), &baseline)
            .unwrap();
        assert_eq!(verdict, Verdict::Normal, "mean of {} should be normal", season);
    }

    let hot = classifier
        .classify(&LiveReading::new(40.0, "winter"), &baseline)
        .unwrap();
    assert_eq!(hot, Verdict::Anomalous);
}

#[test]
fn e2e_selector_season_missing_from_data() {
    let summer_only: Vec<Observation> = history()
        .into_iter()
        .filter(|o| o.season == Season::summer())
        .collect();
    let baseline = compute_baseline(&summer_only);

    let err = LiveAnomalyClassifier::default()
        .classify(&LiveReading::new(0.0, "winter"), &baseline)
        .unwrap_err();
    assert_eq!(err, SeasonalError::SeasonNotFound { season: Season::winter() });
}

#[test]
fn e2e_strict_policy_for_sparse_history() {
    let data = vec![
        Observation::new("Reykjavik", "2019-01-01", -1.0, "winter"),
        Observation::new("Reykjavik", "2019-07-01", 12.0, "summer"),
        Observation::new("Reykjavik", "2020-07-01", 13.0, "summer"),
    ];
    let baseline = compute_baseline(&data);

    let lenient = LiveAnomalyClassifier::default();
    let strict = LiveAnomalyClassifier::from_config(ClassifierConfig::strict());
    let reading = LiveReading::new(-30.0, "winter");

    assert_eq!(lenient.classify(&reading, &baseline).unwrap(), Verdict::Normal);
    assert_eq!(strict.classify(&reading, &baseline).unwrap(), Verdict::Indeterminate);
}

#[test]
fn e2e_annotated_rows_serialize_for_chart() {
    let data = history();
    let baseline = compute_baseline(&data);
    let annotated = annotate(&data, &baseline).unwrap();

    let rows: Vec<_> = annotated.iter().collect();
    let json = serde_json::to_value(&rows).unwrap();
    let first = &json[0];
    assert_eq!(first["city"], "Warsaw");
    assert!(first["mean_temperature"].is_number());
    assert_eq!(first["is_anomaly"], false);

    let table = serde_json::to_value(&baseline).unwrap();
    assert!(table["summer"]["std"].is_number());
}

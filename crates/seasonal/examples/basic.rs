//! Basic example demonstrating seasonal baselines
//!
//! Run with: cargo run --example basic -p seasonal

use seasonal::{
    annotate, classify, compute_baseline, LiveReading, Observation, SeasonalError,
};

fn main() -> Result<(), SeasonalError> {
    println!("=== seasonal Basic Examples ===\n");

    let history = vec![
        Observation::new("Tokyo", "2020-01-10", 5.1, "winter"),
        Observation::new("Tokyo", "2020-01-11", 6.3, "winter"),
        Observation::new("Tokyo", "2020-01-12", 4.8, "winter"),
        Observation::new("Tokyo", "2020-01-13", 5.6, "winter"),
        Observation::new("Tokyo", "2020-01-14", 5.9, "winter"),
        Observation::new("Tokyo", "2020-01-15", 5.2, "winter"),
        Observation::new("Tokyo", "2020-01-16", 17.0, "winter"),
        Observation::new("Tokyo", "2020-07-10", 27.4, "summer"),
    ];

    // 1. Baseline
    println!("1. Seasonal baseline");
    let baseline = compute_baseline(&history);
    for (season, stats) in &baseline {
        let std = stats
            .std
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "undefined".to_string());
        println!("   {:<8} mean={:.2} std={} n={}", season, stats.mean, std, stats.count);
    }

    // 2. Annotated history
    println!("\n2. Anomalies in history");
    let annotated = annotate(&history, &baseline)?;
    for row in annotated.anomalies() {
        println!(
            "   {} {:.1}°C (season mean {:.2})",
            row.observation.timestamp, row.observation.temperature, row.mean_temperature
        );
    }

    // 3. Live readings
    println!("\n3. Live readings");
    for reading in [
        LiveReading::new(6.0, "winter"),
        LiveReading::new(40.0, "summer"),
        LiveReading::new(20.0, "monsoon"),
    ] {
        match classify(&reading, &baseline) {
            Ok(verdict) => println!("   {:.1}°C in {}: {}", reading.temperature, reading.season, verdict),
            Err(e) => println!("   {:.1}°C in {}: {}", reading.temperature, reading.season, e),
        }
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}

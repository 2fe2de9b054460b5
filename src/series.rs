use crate::hash::hash_string;
use crate::params::CorrelationParams;
use crate::rng::SeededRandom;
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub date: String,
    pub value: f64,
}

/// The shared draw for point `index` of every series of `correlation_id`.
///
/// A fresh generator is seeded from `"{correlation_id}_{index}"` each time,
/// so the draw is a pure function of its arguments.
pub fn shape_draw(correlation_id: &str, index: usize) -> f64 {
    let key = format!("{}_{}", correlation_id, index);
    SeededRandom::new(hash_string(&key) as i64).next()
}

/// Rounds to 2 decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Short month + day label, e.g. `Jan 5`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Generates `num_points` observations ending today (local time).
///
/// Values depend only on the arguments; the date labels depend on the day
/// the call is made.
pub fn generate_metric_data(
    seed: &str,
    params: &CorrelationParams,
    is_primary: bool,
    num_points: usize,
) -> Vec<DataPoint> {
    generate_metric_data_on(seed, params, is_primary, num_points, Local::now().date_naive())
}

/// Generates `num_points` observations whose last label is `today`.
///
/// The point count is not validated here.
pub fn generate_metric_data_on(
    seed: &str,
    params: &CorrelationParams,
    is_primary: bool,
    num_points: usize,
    today: NaiveDate,
) -> Vec<DataPoint> {
    let mut rng = SeededRandom::new(hash_string(seed) as i64);
    let (base_value, range) = params.base_and_range(is_primary);
    let strength = params.correlation_strength;
    let trend = f64::from(params.trend_direction);

    let data: Vec<DataPoint> = (0..num_points)
        .map(|i| {
            let base_pattern = libm::sin(i as f64 * 0.8) + (shape_draw(&params.correlation_id, i) - 0.5) * 0.5;
            let trend_component = (i as f64 / num_points as f64) * trend * 0.3;
            // draw order matters: one for the metric, one for independent noise
            let metric_randomness = (rng.next() - 0.5) * (1.0 - strength) * 0.6;
            let independent_noise = (rng.next() - 0.5) * 0.4;

            let raw = base_value
                + (base_pattern * strength + metric_randomness + trend_component + independent_noise) * range;
            let rounded = round2(raw);
            let days_back = (num_points - 1 - i) as i64;
            DataPoint {
                date: date_label(today - Duration::days(days_back)),
                // also folds -0.0 into 0.0
                value: if rounded > 0.0 { rounded } else { 0.0 },
            }
        })
        .collect();

    debug!(seed, correlation_id = %params.correlation_id, is_primary, num_points, "generated metric series");
    data
}

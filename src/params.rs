use crate::hash::hash_string;
use crate::rng::SeededRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Statistical parameters shared by every series of one correlation id.
///
/// Entirely derived from the id; two calls with the same id give
/// bit-identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationParams {
    pub correlation_id: String,
    pub correlation_strength: f64,
    pub metric_pair_index: u32,
    pub caption_index: u32,
    pub r_squared: f64,
    pub base_value_a: f64,
    pub range_a: f64,
    pub base_value_b: f64,
    pub range_b: f64,
    pub trend_direction: i8,
}

impl CorrelationParams {
    /// Base value and range for the primary (A) or secondary (B) series.
    pub fn base_and_range(&self, is_primary: bool) -> (f64, f64) {
        if is_primary {
            (self.base_value_a, self.range_a)
        } else {
            (self.base_value_b, self.range_b)
        }
    }
}

/// Derives the shared parameters for `correlation_id`.
///
/// The draw order is fixed; each field consumes exactly one step of a
/// generator seeded with `hash_string(correlation_id)`.
pub fn generate_correlation_params(correlation_id: &str) -> CorrelationParams {
    let mut rng = SeededRandom::new(hash_string(correlation_id) as i64);

    let correlation_strength = rng.next_float(0.77, 0.95);
    let metric_pair_index = rng.next_int(0, 999_999) as u32;
    let caption_index = rng.next_int(0, 999_999) as u32;
    let r_squared = rng.next_float(0.6, 0.9);
    let base_value_a = rng.next_float(50.0, 150.0);
    let range_a = rng.next_float(20.0, 80.0);
    let base_value_b = rng.next_float(100.0, 600.0);
    let range_b = rng.next_float(50.0, 300.0);
    let trend_direction = if rng.next() > 0.5 { 1 } else { -1 };

    debug!(correlation_id, correlation_strength, metric_pair_index, trend_direction, "derived correlation params");

    CorrelationParams {
        correlation_id: correlation_id.to_string(),
        correlation_strength,
        metric_pair_index,
        caption_index,
        r_squared,
        base_value_a,
        range_a,
        base_value_b,
        range_b,
        trend_direction,
    }
}

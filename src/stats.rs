use crate::error::{Error, Result};
use crate::series::DataPoint;
use serde::Serialize;
use tracing::warn;

/// Anything carrying a single numeric observation.
pub trait Observation {
    fn value(&self) -> f64;
}

impl Observation for DataPoint {
    fn value(&self) -> f64 {
        self.value
    }
}

impl Observation for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationStats {
    pub r_squared: f64,
    pub p_value: f64,
}

/// Squared Pearson correlation of two equally long series.
///
/// Returns 0 when either series has zero variance instead of NaN.
pub fn pearson_r_squared<A: Observation, B: Observation>(xs: &[A], ys: &[B]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().map(Observation::value).sum::<f64>() / n;
    let mean_y = ys.iter().map(Observation::value).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator_x = 0.0;
    let mut denominator_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x.value() - mean_x;
        let dy = y.value() - mean_y;
        numerator += dx * dy;
        denominator_x += dx * dx;
        denominator_y += dy * dy;
    }

    let denominator = (denominator_x * denominator_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        warn!(n = xs.len(), "zero-variance series, reporting r² = 0");
        return 0.0;
    }
    let r = numerator / denominator;
    r * r
}

/// Bucketed p-value for an r² over `n` points. Not a real significance test.
pub fn p_value_bucket(r_squared: f64, n: usize) -> f64 {
    if r_squared >= 0.8 {
        if n >= 20 { 0.001 } else { 0.01 }
    } else if r_squared >= 0.7 {
        if n >= 20 { 0.01 } else { 0.05 }
    } else {
        0.05
    }
}

/// Rounds to 3 decimal places, ties away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// r² (rounded to 3 places) and bucketed p-value for two series.
///
/// The bucket is chosen from the unrounded r².
pub fn calculate_correlation_stats<A: Observation, B: Observation>(
    series_a: &[A],
    series_b: &[B],
) -> Result<CorrelationStats> {
    if series_a.len() != series_b.len() {
        return Err(Error::LengthMismatch { left: series_a.len(), right: series_b.len() });
    }
    let n = series_a.len();
    if n < 2 {
        return Err(Error::TooFewPoints { n });
    }

    let r_squared = pearson_r_squared(series_a, series_b);
    Ok(CorrelationStats {
        r_squared: round3(r_squared),
        p_value: p_value_bucket(r_squared, n),
    })
}

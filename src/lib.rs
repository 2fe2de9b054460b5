pub mod error;
pub mod hash;
pub mod rng;
pub mod params;
pub mod series;
pub mod stats;
pub mod catalog;
pub mod chart;

pub use error::{Error, Result};
pub use hash::hash_string;
pub use params::{generate_correlation_params, CorrelationParams};
pub use rng::SeededRandom;
pub use series::{generate_metric_data, generate_metric_data_on, DataPoint};
pub use stats::{calculate_correlation_stats, CorrelationStats};

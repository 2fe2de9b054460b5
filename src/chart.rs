//! Request-level operations: what a chart page asks of the generator.
//!
//! Everything here validates its input and then defers to the pure
//! functions in [`crate::params`], [`crate::series`] and [`crate::stats`].

use crate::catalog::{self, MetricCategory};
use crate::error::{Error, Result};
use crate::hash::hash_string;
use crate::params::generate_correlation_params;
use crate::rng::SeededRandom;
use crate::series::{generate_metric_data, DataPoint};
use crate::stats::{calculate_correlation_stats, pearson_r_squared, CorrelationStats};
use chrono::Utc;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

pub const MIN_POINTS: usize = 5;
pub const MAX_POINTS: usize = 100;
pub const DEFAULT_POINTS: usize = 10;

/// A point count known to lie in `[MIN_POINTS, MAX_POINTS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PointCount(usize);

impl PointCount {
    pub fn new(points: usize) -> Result<Self> {
        if (MIN_POINTS..=MAX_POINTS).contains(&points) {
            Ok(PointCount(points))
        } else {
            Err(Error::PointsOutOfRange { points })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PointCount {
    fn default() -> Self {
        PointCount(DEFAULT_POINTS)
    }
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::MissingField { field })
    } else {
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub metric: &'static str,
    pub metric_type: &'static str,
    pub unit: &'static str,
    pub data: Vec<DataPoint>,
    pub seed: String,
    pub correlation_id: String,
    pub is_metric_a: bool,
    pub points: PointCount,
}

/// One metric series with its name and unit.
pub fn metric_report(seed: &str, correlation_id: &str, points: PointCount) -> Result<MetricReport> {
    let seed = require(seed, "seed")?;
    let correlation_id = require(correlation_id, "correlationId")?;

    let params = generate_correlation_params(correlation_id);
    let category = MetricCategory::for_seed(seed);
    let def = category.metric(params.metric_pair_index);

    // The unit draw uses its own generator; the series builds another one
    // from the same seed, so the two never share state.
    let unit = *SeededRandom::new(hash_string(seed) as i64).next_element(def.units);
    let data = generate_metric_data(seed, &params, category.is_primary(), points.get());

    debug!(seed, correlation_id, metric = def.metric, unit, "built metric report");

    Ok(MetricReport {
        metric: def.metric,
        metric_type: category.name(),
        unit,
        data,
        seed: seed.to_string(),
        correlation_id: correlation_id.to_string(),
        is_metric_a: category.is_primary(),
        points,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionReport {
    pub caption: &'static str,
    pub correlation_id: String,
    pub caption_index: usize,
}

pub fn caption_report(correlation_id: &str) -> Result<CaptionReport> {
    let correlation_id = require(correlation_id, "correlationId")?;
    let params = generate_correlation_params(correlation_id);
    let (caption_index, caption) = catalog::caption(params.caption_index);
    Ok(CaptionReport {
        caption,
        correlation_id: correlation_id.to_string(),
        caption_index,
    })
}

/// A shareable chart definition: `seed1-seed2-correlationId` plus a point
/// count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCode {
    pub seed_a: String,
    pub seed_b: String,
    pub correlation_id: String,
    pub points: PointCount,
}

impl ShareCode {
    /// Parts may not contain `-`, so every code renders back to itself.
    pub fn new(seed_a: &str, seed_b: &str, correlation_id: &str, points: PointCount) -> Result<Self> {
        if [seed_a, seed_b, correlation_id].iter().any(|part| part.contains('-')) {
            return Err(Error::MalformedShareCode {
                code: format!("{}-{}-{}", seed_a, seed_b, correlation_id),
            });
        }
        Ok(ShareCode {
            seed_a: require(seed_a, "seed")?.to_string(),
            seed_b: require(seed_b, "seed")?.to_string(),
            correlation_id: require(correlation_id, "correlationId")?.to_string(),
            points,
        })
    }

    pub fn with_points(mut self, points: PointCount) -> Self {
        self.points = points;
        self
    }

    /// Query string for a share link; `points` is only spelled out when it
    /// differs from the default.
    pub fn query(&self) -> String {
        if self.points.get() == DEFAULT_POINTS {
            format!("cc={}", self)
        } else {
            format!("cc={}&points={}", self, self.points.get())
        }
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.seed_a, self.seed_b, self.correlation_id)
    }
}

impl FromStr for ShareCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let parts: Vec<&str> = code.split('-').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(Error::MalformedShareCode { code: code.to_string() });
        }
        ShareCode::new(parts[0], parts[1], parts[2], PointCount::default())
    }
}

/// Three words that make up a brand new chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Words {
    pub adjective_am: &'static str,
    pub adjective_nz: &'static str,
    pub noun: &'static str,
    pub seed: String,
}

impl Words {
    /// The chart these words name: a-m adjective, n-z adjective, noun.
    pub fn share_code(&self, points: PointCount) -> ShareCode {
        ShareCode {
            seed_a: self.adjective_am.to_string(),
            seed_b: self.adjective_nz.to_string(),
            correlation_id: self.noun.to_string(),
            points,
        }
    }
}

/// Picks the words for a new chart. Draw order is a-m adjective, n-z
/// adjective, then noun, all from one generator seeded by `hash(seed)`.
pub fn random_words(seed: &str) -> Words {
    let mut rng = SeededRandom::new(hash_string(seed) as i64);
    let adjective_am = *rng.next_element(catalog::ADJECTIVES_A_M);
    let adjective_nz = *rng.next_element(catalog::ADJECTIVES_N_Z);
    let noun = *rng.next_element(catalog::NOUNS);

    debug!(seed, adjective_am, adjective_nz, noun, "picked words");

    Words {
        adjective_am,
        adjective_nz,
        noun,
        seed: seed.to_string(),
    }
}

/// A fresh seed from the wall clock: epoch milliseconds with a sub-millisecond
/// fraction, e.g. `1718208000123.987654`.
pub fn clock_seed() -> String {
    let now = Utc::now();
    format!("{}.{:06}", now.timestamp_millis(), now.timestamp_subsec_nanos() % 1_000_000)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub date: String,
    pub metric_a: f64,
    pub metric_b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub share_code: String,
    pub metric_a: MetricReport,
    pub metric_b: MetricReport,
    pub caption: CaptionReport,
    pub rows: Vec<ChartRow>,
    pub stats: CorrelationStats,
}

/// Builds both series and the caption for a share code, then joins them.
///
/// The three lookups are independent and run in parallel. Column A holds
/// the devops series and column B the absurd one, whichever seed came
/// first. When both seeds land in the same category, share-code order is
/// kept for devops pairs and reversed for absurd pairs.
pub fn build_chart(code: &ShareCode) -> Result<Chart> {
    let (reports, caption) = rayon::join(
        || {
            rayon::join(
                || metric_report(&code.seed_a, &code.correlation_id, code.points),
                || metric_report(&code.seed_b, &code.correlation_id, code.points),
            )
        },
        || caption_report(&code.correlation_id),
    );
    let (first, second) = (reports.0?, reports.1?);
    let (metric_a, metric_b) = if first.is_metric_a { (first, second) } else { (second, first) };
    let caption = caption?;

    let rows = metric_a
        .data
        .iter()
        .zip(&metric_b.data)
        .map(|(a, b)| ChartRow {
            date: a.date.clone(),
            metric_a: a.value,
            metric_b: b.value,
        })
        .collect();
    let stats = calculate_correlation_stats(&metric_a.data, &metric_b.data)?;

    info!(share_code = %code, r_squared = stats.r_squared, p_value = stats.p_value, "built chart");

    Ok(Chart {
        share_code: code.to_string(),
        metric_a,
        metric_b,
        caption,
        rows,
        stats,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReport {
    pub pairings: usize,
    pub points: PointCount,
    pub passing: usize,
    pub pass_rate: f64,
    pub min_r_squared: f64,
    pub mean_r_squared: f64,
}

/// Generates `pairings` charts with ids `{prefix}-{k}` and counts how many
/// reach r² >= 0.6.
pub fn survey(prefix: &str, pairings: usize, points: PointCount) -> Result<SurveyReport> {
    let prefix = require(prefix, "prefix")?;
    if pairings == 0 {
        return Err(Error::NoPairings);
    }

    let r_squared: Vec<f64> = (0..pairings)
        .into_par_iter()
        .map(|k| {
            let params = generate_correlation_params(&format!("{}-{}", prefix, k));
            let a = generate_metric_data(&format!("a{}", k), &params, true, points.get());
            let b = generate_metric_data(&format!("z{}", k), &params, false, points.get());
            pearson_r_squared(&a, &b)
        })
        .collect();

    let passing = r_squared.iter().filter(|&&r2| r2 >= 0.6).count();
    let min_r_squared = r_squared.iter().cloned().fold(f64::INFINITY, f64::min);
    let mean_r_squared = r_squared.iter().sum::<f64>() / pairings as f64;

    info!(prefix, pairings, passing, "survey finished");

    Ok(SurveyReport {
        pairings,
        points,
        passing,
        pass_rate: passing as f64 / pairings as f64,
        min_r_squared,
        mean_r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> PointCount {
        PointCount::new(10).unwrap()
    }

    #[test]
    fn test_point_count_bounds() {
        assert!(PointCount::new(4).is_err());
        assert!(PointCount::new(101).is_err());
        assert_eq!(PointCount::new(5).unwrap().get(), 5);
        assert_eq!(PointCount::new(100).unwrap().get(), 100);
        assert_eq!(PointCount::default().get(), DEFAULT_POINTS);
    }

    #[test]
    fn test_metric_report_devops_seed() {
        let report = metric_report("blue", "coffee", ten()).unwrap();
        assert_eq!(report.metric, "Chaos engineering blast radius");
        assert_eq!(report.metric_type, "devops");
        assert_eq!(report.unit, "affected");
        assert!(report.is_metric_a);
        assert_eq!(report.data.len(), 10);
        assert_eq!(report.data[0].value, 125.24);
    }

    #[test]
    fn test_metric_report_absurd_seed() {
        let report = metric_report("quiet", "coffee", ten()).unwrap();
        assert_eq!(report.metric, "Foam roller usage in break rooms");
        assert_eq!(report.metric_type, "absurd");
        assert_eq!(report.unit, "uses");
        assert!(!report.is_metric_a);
        assert_eq!(report.data[9].value, 462.02);
    }

    #[test]
    fn test_metric_report_requires_fields() {
        match metric_report("", "coffee", ten()) {
            Err(Error::MissingField { field: "seed" }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match metric_report("blue", "", ten()) {
            Err(Error::MissingField { field: "correlationId" }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_metric_report_json_shape() {
        let report = metric_report("blue", "coffee", PointCount::new(5).unwrap()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["metricType"], "devops");
        assert_eq!(json["isMetricA"], true);
        assert_eq!(json["points"], 5);
        assert_eq!(json["correlationId"], "coffee");
        assert_eq!(json["data"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_caption_report() {
        let report = caption_report("coffee").unwrap();
        assert_eq!(report.caption_index, 22);
        assert_eq!(report.caption, "Results guaranteed to be statistically significant (p < 0.05).");
        assert!(caption_report("").is_err());
    }

    #[test]
    fn test_share_code_parse_and_render() {
        let code: ShareCode = "blue-quiet-coffee".parse().unwrap();
        assert_eq!(code.seed_a, "blue");
        assert_eq!(code.seed_b, "quiet");
        assert_eq!(code.correlation_id, "coffee");
        assert_eq!(code.to_string(), "blue-quiet-coffee");
        assert_eq!(code.query(), "cc=blue-quiet-coffee");
        let code = code.with_points(PointCount::new(25).unwrap());
        assert_eq!(code.query(), "cc=blue-quiet-coffee&points=25");
    }

    #[test]
    fn test_share_code_rejects_malformed() {
        for bad in ["blue-quiet", "a-b-c-d", "blue--coffee", ""].iter() {
            match bad.parse::<ShareCode>() {
                Err(Error::MalformedShareCode { .. }) => {}
                other => panic!("{:?} gave {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_build_chart_joins_series() {
        let code: ShareCode = "blue-quiet-coffee".parse().unwrap();
        let chart = build_chart(&code).unwrap();
        assert_eq!(chart.rows.len(), 10);
        assert_eq!(chart.rows[0].metric_a, 125.24);
        assert_eq!(chart.rows[0].metric_b, 416.08);
        assert_eq!(chart.rows[0].date, chart.metric_a.data[0].date);
        assert_eq!(chart.stats.r_squared, 0.946);
        assert_eq!(chart.stats.p_value, 0.01);
        assert_eq!(chart.share_code, "blue-quiet-coffee");
    }

    #[test]
    fn test_build_chart_puts_devops_in_column_a() {
        let chart = build_chart(&"quiet-blue-coffee".parse().unwrap()).unwrap();
        assert_eq!(chart.metric_a.metric_type, "devops");
        assert_eq!(chart.metric_a.seed, "blue");
        assert_eq!(chart.metric_b.metric_type, "absurd");
        assert_eq!(chart.rows[0].metric_a, 125.24);
        assert_eq!(chart.rows[0].metric_b, 416.08);
        assert_eq!(chart.stats.r_squared, 0.946);
        assert_eq!(chart.share_code, "quiet-blue-coffee");
    }

    #[test]
    fn test_build_chart_same_category_order() {
        let devops = build_chart(&"amber-blue-coffee".parse().unwrap()).unwrap();
        assert_eq!(devops.metric_a.seed, "amber");
        assert_eq!(devops.metric_b.seed, "blue");

        let absurd = build_chart(&"quiet-velvet-coffee".parse().unwrap()).unwrap();
        assert_eq!(absurd.metric_a.seed, "velvet");
        assert_eq!(absurd.metric_b.seed, "quiet");
    }

    #[test]
    fn test_share_code_rejects_dashed_parts() {
        for (a, b, id) in [("blue-ish", "quiet", "coffee"), ("blue", "quiet", "coffee-pot")].iter() {
            match ShareCode::new(a, b, id, ten()) {
                Err(Error::MalformedShareCode { .. }) => {}
                other => panic!("{:?} gave {:?}", (a, b, id), other),
            }
        }
        let code = ShareCode::new("blue", "quiet", "coffee", ten()).unwrap();
        assert_eq!(code.to_string().parse::<ShareCode>().unwrap(), code);
    }

    #[test]
    fn test_random_words_pinned() {
        let words = random_words("1700000000000.5");
        assert_eq!((words.adjective_am, words.adjective_nz, words.noun), ("amber", "zany", "volcano"));
        let words = random_words("1718208000123.9876");
        assert_eq!((words.adjective_am, words.adjective_nz, words.noun), ("brave", "zesty", "garden"));
        assert_eq!(words.seed, "1718208000123.9876");
    }

    #[test]
    fn test_random_words_make_a_chart() {
        let words = random_words("seed");
        assert_eq!((words.adjective_am, words.adjective_nz, words.noun), ("glossy", "noisy", "noodle"));
        let code = words.share_code(ten());
        assert_eq!(code.to_string(), "glossy-noisy-noodle");
        assert_eq!(code.to_string().parse::<ShareCode>().unwrap(), code);

        let chart = build_chart(&code).unwrap();
        assert_eq!(chart.metric_a.metric_type, "devops");
        assert_eq!(chart.metric_b.metric_type, "absurd");
    }

    #[test]
    fn test_clock_seed_format() {
        let seed = clock_seed();
        let (millis, fraction) = seed.split_at(seed.find('.').unwrap());
        assert!(millis.parse::<i64>().unwrap() > 1_600_000_000_000);
        assert_eq!(fraction.len(), 7);
        assert_eq!(random_words(&seed), random_words(&seed));
    }

    #[test]
    fn test_build_chart_is_repeatable() {
        let code = ShareCode::new("amber", "velvet", "lighthouse", PointCount::new(40).unwrap()).unwrap();
        let first = build_chart(&code).unwrap();
        let second = build_chart(&code).unwrap();
        assert_eq!(first.stats, second.stats);
        assert_eq!(first.rows.len(), 40);
    }

    #[test]
    fn test_survey_mostly_passes() {
        let report = survey("noun", 200, ten()).unwrap();
        assert_eq!(report.pairings, 200);
        assert!(report.pass_rate >= 0.9, "pass rate {}", report.pass_rate);
        assert!(report.min_r_squared <= report.mean_r_squared);
        match survey("noun", 0, ten()) {
            Err(Error::NoPairings) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}

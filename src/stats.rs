//! Grouped descriptive statistics for benchmark timings
//!
//! Statistics conventions: percentiles use linear interpolation between
//! closest ranks; standard deviation is the sample deviation (N-1 divisor),
//! 0.0 for groups of size 1.

use crate::loader::{Sample, SizedSample};
use std::collections::BTreeMap;

/// Descriptive statistics for one group of observations
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub count: usize,
    pub mean: f32,
    pub stddev: f32,
    pub min: f32,
    /// 25th percentile
    pub q1: f32,
    /// 50th percentile
    pub median: f32,
    /// 75th percentile
    pub q3: f32,
    pub max: f32,
}

impl GroupStats {
    /// Compute statistics for one group of timings
    ///
    /// A single observation yields degenerate quartiles equal to that value.
    /// An empty slice yields all-zero statistics; grouping never produces one.
    pub fn from_times(times: &[f32]) -> Self {
        let v = trueno::Vector::from_slice(times);
        let mean = v.mean().unwrap_or(0.0);
        let min = v.min().unwrap_or(0.0);
        let max = v.max().unwrap_or(0.0);

        let mut sorted = times.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            count: times.len(),
            mean,
            stddev: sample_stddev(times, mean),
            min,
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max,
        }
    }
}

/// Sample standard deviation (N-1 divisor); 0.0 below two observations
fn sample_stddev(times: &[f32], mean: f32) -> f32 {
    if times.len() < 2 {
        return 0.0;
    }
    let sum_sq: f32 = times.iter().map(|t| (t - mean) * (t - mean)).sum();
    (sum_sq / (times.len() - 1) as f32).sqrt()
}

/// Calculate percentile from sorted data
fn percentile(sorted_data: &[f32], percentile: f32) -> f32 {
    if sorted_data.is_empty() {
        return 0.0;
    }
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let index = (percentile / 100.0) * (sorted_data.len() - 1) as f32;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = index - lower as f32;
        sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
    }
}

/// Group overhead samples by method
///
/// `BTreeMap` keeps methods in lexicographic order for deterministic output.
pub fn group_by_method(samples: &[Sample]) -> BTreeMap<String, GroupStats> {
    let mut grouped: BTreeMap<String, Vec<f32>> = BTreeMap::new();
    for sample in samples {
        grouped
            .entry(sample.method.clone())
            .or_default()
            .push(sample.time);
    }
    tracing::debug!(groups = grouped.len(), "aggregated by method");
    grouped
        .into_iter()
        .map(|(method, times)| (method, GroupStats::from_times(&times)))
        .collect()
}

/// Group dining samples by (method, N)
///
/// Iteration yields methods lexicographically with N ascending within each
/// method, which is the ordering the chart series require.
pub fn group_by_method_and_n(samples: &[SizedSample]) -> BTreeMap<(String, u32), GroupStats> {
    let mut grouped: BTreeMap<(String, u32), Vec<f32>> = BTreeMap::new();
    for sample in samples {
        grouped
            .entry((sample.method.clone(), sample.n))
            .or_default()
            .push(sample.time);
    }
    tracing::debug!(groups = grouped.len(), "aggregated by method and n");
    grouped
        .into_iter()
        .map(|(key, times)| (key, GroupStats::from_times(&times)))
        .collect()
}

//! Summary Statistics
//!
//! Latency summary over the elapsed times of one run.

use crate::percentiles::compute_percentiles;

/// Summary statistics over a set of samples
#[derive(Debug, Clone, Default)]
pub struct SummaryStatistics {
    /// Number of samples
    pub sample_count: usize,
    /// Sum of all samples
    pub total: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (same as p50)
    pub median: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// 90th percentile
    pub p90: f64,
    /// 95th percentile
    pub p95: f64,
    /// 99th percentile
    pub p99: f64,
}

/// Compute summary statistics. Empty input yields all zeros.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let n = samples.len();
    let total: f64 = samples.iter().sum();
    let mean = total / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let percentiles = compute_percentiles(samples);

    SummaryStatistics {
        sample_count: n,
        total,
        mean,
        median: percentiles.p50,
        std_dev,
        min,
        max,
        p90: percentiles.p90,
        p95: percentiles.p95,
        p99: percentiles.p99,
    }
}

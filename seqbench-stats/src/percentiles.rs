//! Percentiles of elapsed times
//!
//! Every sample counts. A handful of slow queries is exactly what a
//! latency run is looking for, so nothing is trimmed before ranking.

/// The percentiles reported for a run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Percentiles {
    /// Median
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 95th percentile
    pub p95: f64,
    /// 99th percentile
    pub p99: f64,
}

/// Percentile `p` (0-100) of `samples`, interpolating linearly between
/// the two nearest ranks.
///
/// Empty input gives 0.
///
/// ```
/// # use seqbench_stats::compute_percentile;
/// assert_eq!(compute_percentile(&[3.0, 1.0, 2.0, 5.0, 4.0], 50.0), 3.0);
/// assert_eq!(compute_percentile(&[1.0, 2.0, 3.0, 4.0], 50.0), 2.5);
/// ```
pub fn compute_percentile(samples: &[f64], p: f64) -> f64 {
    interpolate(&sorted(samples), p)
}

/// All reported percentiles, sorting the samples once
pub fn compute_percentiles(samples: &[f64]) -> Percentiles {
    let sorted = sorted(samples);
    Percentiles {
        p50: interpolate(&sorted, 50.0),
        p90: interpolate(&sorted, 90.0),
        p95: interpolate(&sorted, 95.0),
        p99: interpolate(&sorted, 99.0),
    }
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// `sorted` must be in ascending order
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };

    let position = (p / 100.0).clamp(0.0, 1.0) * last as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let weight = position - below as f64;

    sorted[below] * (1.0 - weight) + sorted[above] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsorted_input() {
        assert_eq!(compute_percentile(&[0.9, 0.1, 0.5], 50.0), 0.5);
    }

    #[test]
    fn test_bounds() {
        let samples: Vec<f64> = (1..=1000).map(f64::from).collect();
        assert_eq!(compute_percentile(&samples, 0.0), 1.0);
        assert_eq!(compute_percentile(&samples, 100.0), 1000.0);
        assert_eq!(compute_percentile(&samples, 150.0), 1000.0);

        let p99 = compute_percentile(&samples, 99.0);
        assert!(p99 > 985.0 && p99 < 995.0);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(compute_percentile(&[0.42], 99.0), 0.42);
        assert_eq!(compute_percentile(&[], 50.0), 0.0);
        assert_eq!(compute_percentiles(&[]), Percentiles::default());
    }

    #[test]
    fn test_reported_set() {
        let samples: Vec<f64> = (1..=101).map(f64::from).collect();
        let percentiles = compute_percentiles(&samples);
        assert_eq!(percentiles.p50, 51.0);
        assert_eq!(percentiles.p90, 91.0);
        assert_eq!(percentiles.p95, 96.0);
        assert_eq!(percentiles.p99, 100.0);
    }
}

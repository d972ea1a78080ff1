//! Correlation
//!
//! Relates a per-record property (complexity score, sequence length) to
//! the search latency of that record.
//!
//! - Pearson's r measures linear association.
//! - Spearman's rho is Pearson's r over ranks, so it captures any monotonic
//!   relationship and is robust to the long latency tail. Tied values share
//!   the average of the ranks they span.

/// Both correlation coefficients for one pair of series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    /// Number of paired observations
    pub n: usize,
    /// Pearson's r, `None` if undefined
    pub pearson: Option<f64>,
    /// Spearman's rho, `None` if undefined
    pub spearman: Option<f64>,
}

/// Compute Pearson and Spearman coefficients for paired series
pub fn correlate(x: &[f64], y: &[f64]) -> Correlation {
    Correlation {
        n: x.len().min(y.len()),
        pearson: pearson(x, y),
        spearman: spearman(x, y),
    }
}

/// Pearson's product-moment correlation.
///
/// Returns `None` when the series differ in length, have fewer than two
/// points, or either series has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= f64::EPSILON || var_y <= f64::EPSILON {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    if r.is_finite() {
        // Rounding can push |r| a hair past 1
        Some(r.clamp(-1.0, 1.0))
    } else {
        None
    }
}

/// Spearman's rank correlation
pub fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    pearson(&rank(x), &rank(y))
}

/// 1-based fractional ranks; ties receive the mean of their positions
pub fn rank(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Positions i..j (0-based) share ranks i+1..=j
        let shared = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = shared;
        }
        i = j;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_perfect_linear() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);

        let inverse = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &inverse).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_nonlinear() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 4.0, 9.0, 16.0, 1000.0];
        let c = correlate(&x, &y);
        assert_eq!(c.n, 5);
        assert!((c.spearman.unwrap() - 1.0).abs() < 1e-12);
        assert!(c.pearson.unwrap() < 0.9);
    }

    #[test]
    fn test_undefined_cases() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(spearman(&[], &[]), None);
    }

    #[test]
    fn test_rank_with_ties() {
        let ranks = rank(&[10.0, 20.0, 10.0, 30.0]);
        assert_eq!(ranks, vec![1.5, 3.0, 1.5, 4.0]);
    }

    proptest! {
        #[test]
        fn coefficients_stay_in_range(
            pairs in proptest::collection::vec((0.0f64..1e4, 0.0f64..10.0), 2..60)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let c = correlate(&x, &y);
            if let Some(r) = c.pearson {
                prop_assert!((-1.0..=1.0).contains(&r));
            }
            if let Some(rho) = c.spearman {
                prop_assert!((-1.0..=1.0).contains(&rho));
            }
        }
    }
}

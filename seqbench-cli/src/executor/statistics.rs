//! Statistics Computation
//!
//! Aggregates over one run. Only successful searches contribute: the
//! elapsed time of a failed search measures how quickly the tool gave up,
//! not how long the query takes.

use seqbench_report::Measurement;
use seqbench_stats::{Correlation, SummaryStatistics, compute_summary, correlate};

/// Aggregates over the successful measurements of a run
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Elapsed-time summary, `None` when nothing succeeded
    pub latency: Option<SummaryStatistics>,
    /// Complexity score vs. elapsed seconds
    pub complexity_vs_elapsed: Option<Correlation>,
    /// Sequence length vs. elapsed seconds
    pub length_vs_elapsed: Option<Correlation>,
}

/// Compute latency statistics and correlations
pub fn compute_statistics(results: &[Measurement]) -> RunStatistics {
    let succeeded: Vec<&Measurement> = results.iter().filter(|m| m.succeeded()).collect();
    if succeeded.is_empty() {
        return RunStatistics::default();
    }

    let elapsed: Vec<f64> = succeeded.iter().map(|m| m.elapsed_secs).collect();
    let complexity: Vec<f64> = succeeded.iter().map(|m| m.complexity as f64).collect();
    let length: Vec<f64> = succeeded.iter().map(|m| m.length as f64).collect();

    RunStatistics {
        latency: Some(compute_summary(&elapsed)),
        complexity_vs_elapsed: Some(correlate(&complexity, &elapsed)),
        length_vs_elapsed: Some(correlate(&length, &elapsed)),
    }
}

#![warn(missing_docs)]
//! SeqBench Statistical Engine
//!
//! Provides the analysis run over a completed benchmark:
//! - Percentile calculation preserving tail latency signals
//! - Summary statistics of per-record elapsed times
//! - Pearson and Spearman correlation between a sequence property
//!   (complexity, length) and search latency

mod correlation;
mod percentiles;
mod summary;

pub use correlation::{Correlation, correlate, pearson, rank, spearman};
pub use percentiles::{Percentiles, compute_percentile, compute_percentiles};
pub use summary::{SummaryStatistics, compute_summary};

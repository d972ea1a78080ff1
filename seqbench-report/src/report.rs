//! Report Data Structures

use chrono::{DateTime, Utc};
use seqbench_stats::{Correlation, SummaryStatistics};
use serde::{Deserialize, Serialize};

/// One measured record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Record identifier
    pub id: String,
    /// Complexity score of the sequence
    pub complexity: u64,
    /// Sequence length in characters
    pub length: usize,
    /// Wall-clock time from spawn to reap, in seconds
    pub elapsed_secs: f64,
    /// Lines of tool output (hits, for tabular formats)
    pub hits: usize,
    /// How the search process ended
    pub status: SearchStatus,
}

impl Measurement {
    /// Whether the search tool exited successfully
    pub fn succeeded(&self) -> bool {
        matches!(self.status, SearchStatus::Succeeded)
    }
}

/// Exit state of the external search process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SearchStatus {
    /// Exit code 0
    Succeeded,
    /// Non-zero exit code, or `None` when terminated by a signal
    Failed {
        /// Process exit code
        exit_code: Option<i32>,
    },
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Succeeded => write!(f, "succeeded"),
            SearchStatus::Failed { .. } => write!(f, "failed"),
        }
    }
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Every measurement, in input order
    pub results: Vec<Measurement>,
    /// Aggregates over `results`
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// SeqBench version
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Host description
    pub system: SystemInfo,
    /// Search configuration used for the run
    pub config: ReportConfig,
}

/// Search configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Input FASTA path
    pub input: String,
    /// Search program
    pub program: String,
    /// Target database
    pub database: String,
    /// Output format code passed to the tool
    pub outfmt: String,
    /// Thread count passed to the tool
    pub num_threads: u32,
    /// Complexity metric name
    pub complexity_metric: String,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Available cores
    pub cpu_cores: u32,
    /// Total memory
    pub memory_gb: f64,
}

/// Run summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Records measured
    pub total_records: usize,
    /// Searches that exited 0
    pub succeeded: usize,
    /// Searches that exited non-zero
    pub failed: usize,
    /// Wall-clock duration of the whole run
    pub total_duration_ms: f64,
    /// Elapsed-time statistics, absent for an empty run
    pub latency: Option<LatencyMetrics>,
    /// Complexity score vs. elapsed time
    pub complexity_vs_elapsed: Option<CorrelationMetrics>,
    /// Sequence length vs. elapsed time
    pub length_vs_elapsed: Option<CorrelationMetrics>,
}

/// Elapsed-time statistics in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyMetrics {
    /// Successful searches measured
    pub samples: usize,
    /// Sum of elapsed times
    pub total_secs: f64,
    /// Mean elapsed time
    pub mean_secs: f64,
    /// Median elapsed time
    pub median_secs: f64,
    /// Sample standard deviation
    pub std_dev_secs: f64,
    /// Fastest search
    pub min_secs: f64,
    /// Slowest search
    pub max_secs: f64,
    /// 90th percentile
    pub p90_secs: f64,
    /// 95th percentile
    pub p95_secs: f64,
    /// 99th percentile
    pub p99_secs: f64,
}

impl From<&SummaryStatistics> for LatencyMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            samples: stats.sample_count,
            total_secs: stats.total,
            mean_secs: stats.mean,
            median_secs: stats.median,
            std_dev_secs: stats.std_dev,
            min_secs: stats.min,
            max_secs: stats.max,
            p90_secs: stats.p90,
            p95_secs: stats.p95,
            p99_secs: stats.p99,
        }
    }
}

/// Correlation coefficients between a record property and latency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMetrics {
    /// Number of paired points
    pub n: usize,
    /// Pearson coefficient, `None` when undefined
    pub pearson: Option<f64>,
    /// Spearman rank coefficient, `None` when undefined
    pub spearman: Option<f64>,
}

impl From<Correlation> for CorrelationMetrics {
    fn from(c: Correlation) -> Self {
        Self {
            n: c.n,
            pearson: c.pearson,
            spearman: c.spearman,
        }
    }
}

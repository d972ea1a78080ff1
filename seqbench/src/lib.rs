#![warn(missing_docs)]
//! # SeqBench
//!
//! Per-sequence latency benchmarks for external sequence search tools.
//!
//! Every record of a FASTA file is sent to the search tool as a separate
//! query over stdin. The wall-clock time of each search is reported next to
//! the sequence's length and Lempel-Ziv complexity, so slow queries can be
//! related to the shape of their input:
//! - **Streaming input**: records are read one at a time, files of any size
//! - **Process supervision**: one tool process per record, always reaped
//! - **Failure reporting**: non-zero exits are reported and the run continues
//! - **Statistics**: latency percentiles, complexity/length correlation
//! - **Output formats**: TSV rows (default), CSV, JSON reports, human tables
//!
//! ## Quick Start
//!
//! ```text
//! $ seqbench proteins.fa --db /data/blast/t9.features.faa
//! ```
//!
//! ## Library Use
//!
//! ```no_run
//! use seqbench::{ExecutionConfig, Executor, FastaReader, SearchCommand};
//!
//! let search = SearchCommand::new("blastp", "/data/blast/t9.features.faa");
//! let executor = Executor::new(search, ExecutionConfig::default());
//! let records = FastaReader::from_path("proteins.fa")?;
//! let results = executor.execute(records, &mut std::io::stdout())?;
//! println!("{} records measured", results.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

// Re-export core types
pub use seqbench_core::{
    ComplexityMetric, CoreError, FastaReader, LempelZiv, Record, lempel_ziv_complexity,
};

// Re-export stats
pub use seqbench_stats::{Correlation, SummaryStatistics, correlate, compute_summary};

// Re-export report types
pub use seqbench_report::{Measurement, OutputFormat, Report, ReportSummary, SearchStatus};

// Re-export the driver
pub use seqbench_cli::{
    ExecutionConfig, Executor, SearchCommand, SearchOutcome, SeqbenchConfig, SupervisorError,
    compute_statistics,
};

/// Run the SeqBench command line.
///
/// ```no_run
/// fn main() {
///     if let Err(e) = seqbench::run() {
///         eprintln!("Error: {e}");
///         std::process::exit(1);
///     }
/// }
/// ```
pub use seqbench_cli::run;

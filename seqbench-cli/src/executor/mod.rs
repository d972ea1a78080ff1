//! Benchmark Executor
//!
//! Runs one search per record and turns the measurements into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Record (from FastaReader, filtered by the planner)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Spawn tool, feed query, drain, reap, time, score
//! └──────┬──────┘  (rows streamed as each record completes)
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Latency summary, complexity/length correlation
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report with metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - The per-record measurement loop
//! - [`statistics`] - Aggregates over all measurements
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

pub use execution::{ExecutionConfig, Executor};
pub use formatting::{format_human_output, format_summary};
pub use metadata::build_report_meta;
pub use report::build_report;
pub use statistics::{RunStatistics, compute_statistics};

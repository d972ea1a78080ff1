#![warn(missing_docs)]
//! SeqBench Report - Measurement rows and output formats
//!
//! Row formats are streamed one line per record as the run progresses:
//! - TSV (`id<TAB>complexity<TAB>length<TAB>elapsed`, the default)
//! - CSV (spreadsheet-compatible, with header)
//!
//! Document formats are produced once the run is complete:
//! - JSON (machine-readable [`Report`])
//! - Human (aligned table and summary, rendered by the CLI)

mod csv;
mod json;
mod report;
mod tsv;

pub use csv::{CSV_HEADER, format_csv_row};
pub use json::generate_json_report;
pub use report::{
    CorrelationMetrics, LatencyMetrics, Measurement, Report, ReportConfig, ReportMeta,
    ReportSummary, SearchStatus, SystemInfo,
};
pub use tsv::{format_error_line, format_tsv_row};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated rows, streamed
    Tsv,
    /// CSV rows with header, streamed
    Csv,
    /// JSON report at end of run
    Json,
    /// Human-readable table at end of run
    Human,
}

impl OutputFormat {
    /// Whether rows are written as each record completes
    pub fn is_streaming(self) -> bool {
        matches!(self, OutputFormat::Tsv | OutputFormat::Csv)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" | "tab" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

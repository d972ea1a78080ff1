//! Benchmark Execution
//!
//! The measurement loop. Records are processed strictly one after another:
//! each search is spawned, fed, drained and reaped before the next record
//! is read.
//!
//! ## Per-record Flow
//!
//! ```text
//!   Record ──► query payload ──► start timer
//!                                    │
//!                                    ▼
//!                          SearchCommand::run
//!                                    │
//!                                    ▼
//!                stop timer ──► exit status ──► complexity score
//!                                    │
//!                                    ▼
//!                   [error from <id>] + data row, flushed
//! ```
//!
//! A non-zero exit from the tool is reported and the loop moves on. Errors
//! reading input or launching the tool end the run.

use crate::supervisor::{SearchCommand, SupervisorError};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use seqbench_core::{ComplexityMetric, LempelZiv, Record};
use seqbench_report::{
    CSV_HEADER, Measurement, OutputFormat, SearchStatus, format_csv_row, format_error_line,
    format_tsv_row,
};
use std::io::Write;
use std::time::Instant;

/// Configuration for the measurement loop
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Row format; rows are only streamed for TSV and CSV
    pub format: OutputFormat,
    /// Omit the data row of records whose search failed
    pub skip_failed: bool,
    /// Show a progress spinner on stderr
    pub show_progress: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tsv,
            skip_failed: false,
            show_progress: true,
        }
    }
}

/// Runs the search tool once per record
pub struct Executor<M = LempelZiv> {
    search: SearchCommand,
    metric: M,
    config: ExecutionConfig,
}

impl Executor<LempelZiv> {
    /// Executor scoring sequences with Lempel-Ziv complexity
    pub fn new(search: SearchCommand, config: ExecutionConfig) -> Self {
        Self::with_metric(search, LempelZiv, config)
    }
}

impl<M: ComplexityMetric> Executor<M> {
    /// Executor with a custom complexity metric
    pub fn with_metric(search: SearchCommand, metric: M, config: ExecutionConfig) -> Self {
        Self {
            search,
            metric,
            config,
        }
    }

    /// The complexity metric in use
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Search one record and measure it
    pub fn measure(&self, record: &Record) -> Result<Measurement, SupervisorError> {
        let payload = record.query_payload();

        let start = Instant::now();
        let outcome = self.search.run(payload.as_bytes())?;
        let elapsed = start.elapsed();

        let status = if outcome.success() {
            SearchStatus::Succeeded
        } else {
            SearchStatus::Failed {
                exit_code: outcome.exit_code(),
            }
        };

        Ok(Measurement {
            id: record.id.clone(),
            complexity: self.metric.score(&record.sequence),
            length: record.len(),
            elapsed_secs: elapsed.as_secs_f64(),
            hits: outcome.hit_count(),
            status,
        })
    }

    /// Measure every record in order, streaming rows to `out`.
    ///
    /// Returns all measurements, including those whose rows were skipped.
    pub fn execute<I, W>(&self, records: I, out: &mut W) -> anyhow::Result<Vec<Measurement>>
    where
        I: IntoIterator<Item = seqbench_core::Result<Record>>,
        W: Write + ?Sized,
    {
        let pb = if self.config.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        if self.config.format == OutputFormat::Csv {
            writeln!(out, "{}", CSV_HEADER)?;
        }

        let mut results = Vec::new();
        for record in records {
            let record = record.context("Failed to read input record")?;
            pb.set_message(record.id.clone());

            let measurement = self
                .measure(&record)
                .with_context(|| format!("Search could not be run for {}", record.id))?;

            tracing::debug!(
                id = %measurement.id,
                elapsed_secs = measurement.elapsed_secs,
                hits = measurement.hits,
                "record measured"
            );
            self.emit(&measurement, out)?;

            results.push(measurement);
            pb.inc(1);
        }

        pb.finish_and_clear();
        tracing::info!(records = results.len(), "run complete");
        Ok(results)
    }

    fn emit<W: Write + ?Sized>(&self, m: &Measurement, out: &mut W) -> std::io::Result<()> {
        if let SearchStatus::Failed { exit_code } = m.status {
            tracing::warn!(id = %m.id, ?exit_code, "search tool reported failure");
            if self.config.format == OutputFormat::Tsv {
                writeln!(out, "{}", format_error_line(&m.id))?;
            }
        }

        if m.succeeded() || !self.config.skip_failed {
            match self.config.format {
                OutputFormat::Tsv => writeln!(out, "{}", format_tsv_row(m))?,
                OutputFormat::Csv => writeln!(out, "{}", format_csv_row(m))?,
                OutputFormat::Json | OutputFormat::Human => {}
            }
        }

        out.flush()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn fake_executor(script: &str, config: ExecutionConfig) -> Executor {
        let mut search = SearchCommand::new("sh", "/db/proteins.faa");
        search.program_args = vec![
            "-c".to_string(),
            script.to_string(),
            "fake-search".to_string(),
        ];
        Executor::new(search, config)
    }

    fn quiet(format: OutputFormat) -> ExecutionConfig {
        ExecutionConfig {
            format,
            show_progress: false,
            ..Default::default()
        }
    }

    fn records(items: &[(&str, &str)]) -> Vec<seqbench_core::Result<Record>> {
        items
            .iter()
            .map(|(id, seq)| Ok(Record::new(*id, *seq)))
            .collect()
    }

    #[test]
    fn test_single_record_line() {
        let executor = fake_executor("cat", quiet(OutputFormat::Tsv));
        let mut out = Vec::new();
        let results = executor
            .execute(records(&[("P1", "MKT")]), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let fields: Vec<&str> = text.trim_end().split('\t').collect();
        assert_eq!(fields[..3], ["P1", "3", "3"]);
        let elapsed: f64 = fields[3].parse().unwrap();
        assert!(elapsed >= 0.0);
        assert_eq!(text.lines().count(), 1);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].hits, 2);
        assert!(results[0].succeeded());
    }

    #[test]
    fn test_zero_records() {
        let executor = fake_executor("cat", quiet(OutputFormat::Tsv));
        let mut out = Vec::new();
        let results = executor.execute(records(&[]), &mut out).unwrap();
        assert!(results.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_failure_emits_error_and_data_line() {
        let executor = fake_executor("cat >/dev/null; exit 1", quiet(OutputFormat::Tsv));
        let mut out = Vec::new();
        let results = executor
            .execute(records(&[("P1", "MKT"), ("P2", "GG")]), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "error from P1");
        assert!(lines[1].starts_with("P1\t3\t3\t"));
        assert_eq!(lines[2], "error from P2");
        assert!(lines[3].starts_with("P2\t"));
        assert_eq!(
            results[0].status,
            SearchStatus::Failed { exit_code: Some(1) }
        );
    }

    #[test]
    fn test_skip_failed_keeps_error_line_only() {
        let config = ExecutionConfig {
            skip_failed: true,
            ..quiet(OutputFormat::Tsv)
        };
        // Fails only for the query whose header is >BAD
        let executor = fake_executor("grep -q '^>BAD' && exit 2; cat >/dev/null; exit 0", config);
        let mut out = Vec::new();
        let results = executor
            .execute(records(&[("OK1", "MKT"), ("BAD", "AA"), ("OK2", "W")]), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("OK1\t"));
        assert_eq!(lines[1], "error from BAD");
        assert!(lines[2].starts_with("OK2\t"));
        // Skipped rows are still measured
        assert_eq!(results.len(), 3);
        assert!(!results[1].succeeded());
    }

    #[test]
    fn test_csv_stream_has_header() {
        let executor = fake_executor("cat", quiet(OutputFormat::Csv));
        let mut out = Vec::new();
        executor
            .execute(records(&[("P1", "MKT")]), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("P1,3,3,"));
        assert!(lines[1].ends_with(",2,succeeded,0"));
    }

    #[test]
    fn test_document_formats_stream_nothing() {
        let executor = fake_executor("cat >/dev/null; exit 4", quiet(OutputFormat::Json));
        let mut out = Vec::new();
        let results = executor
            .execute(records(&[("P1", "MKT")]), &mut out)
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_read_error_stops_run() {
        let executor = fake_executor("cat", quiet(OutputFormat::Tsv));
        let input = vec![
            Ok(Record::new("P1", "MKT")),
            Err(seqbench_core::CoreError::InvalidFasta {
                line: 3,
                msg: "bad".to_string(),
            }),
            Ok(Record::new("P3", "AA")),
        ];
        let mut out = Vec::new();
        assert!(executor.execute(input, &mut out).is_err());
        // The row for P1 was already emitted
        assert!(String::from_utf8(out).unwrap().starts_with("P1\t"));
    }

    #[test]
    fn test_custom_metric() {
        struct Distinct;
        impl ComplexityMetric for Distinct {
            fn name(&self) -> &'static str {
                "distinct"
            }
            fn score(&self, sequence: &str) -> u64 {
                let set: std::collections::HashSet<char> = sequence.chars().collect();
                set.len() as u64
            }
        }

        let mut search = SearchCommand::new("sh", "/db");
        search.program_args = vec!["-c".to_string(), "cat".to_string(), "x".to_string()];
        let executor = Executor::with_metric(search, Distinct, quiet(OutputFormat::Tsv));
        let m = executor.measure(&Record::new("P1", "AABBA")).unwrap();
        assert_eq!(m.complexity, 2);
        assert_eq!(m.length, 5);
        assert_eq!(executor.metric().name(), "distinct");
    }
}

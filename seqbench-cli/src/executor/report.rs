//! Report Building
//!
//! ```text
//! Vec<Measurement> + RunStatistics + ReportConfig
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │   ReportSummary     │  counts, latency, correlations
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │      Report         │  Ready for JSON/CSV/human output
//!   └─────────────────────┘
//! ```

use super::metadata::build_report_meta;
use super::statistics::RunStatistics;
use seqbench_report::{LatencyMetrics, Measurement, Report, ReportConfig, ReportSummary};

/// Build a complete Report from the run's measurements
pub fn build_report(
    results: Vec<Measurement>,
    stats: &RunStatistics,
    config: ReportConfig,
    total_duration_ms: f64,
) -> Report {
    let succeeded = results.iter().filter(|m| m.succeeded()).count();

    let summary = ReportSummary {
        total_records: results.len(),
        succeeded,
        failed: results.len() - succeeded,
        total_duration_ms,
        latency: stats.latency.as_ref().map(LatencyMetrics::from),
        complexity_vs_elapsed: stats.complexity_vs_elapsed.map(Into::into),
        length_vs_elapsed: stats.length_vs_elapsed.map(Into::into),
    };

    Report {
        meta: build_report_meta(config),
        results,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::compute_statistics;
    use seqbench_report::SearchStatus;

    fn config() -> ReportConfig {
        ReportConfig {
            input: "in.fa".to_string(),
            program: "blastp".to_string(),
            database: "/db".to_string(),
            outfmt: "6".to_string(),
            num_threads: 2,
            complexity_metric: "lempel-ziv".to_string(),
        }
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            Measurement {
                id: "a".to_string(),
                complexity: 3,
                length: 3,
                elapsed_secs: 0.5,
                hits: 1,
                status: SearchStatus::Succeeded,
            },
            Measurement {
                id: "b".to_string(),
                complexity: 2,
                length: 2,
                elapsed_secs: 0.1,
                hits: 0,
                status: SearchStatus::Failed { exit_code: Some(2) },
            },
        ];
        let stats = compute_statistics(&results);
        let report = build_report(results, &stats, config(), 12.0);

        assert_eq!(report.summary.total_records, 2);
        assert_eq!(report.summary.succeeded, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.latency.as_ref().unwrap().samples, 1);
        assert_eq!(report.results[1].id, "b");
        assert_eq!(report.meta.config.program, "blastp");
        assert!(report.meta.system.cpu_cores >= 1);
    }

    #[test]
    fn test_empty_run() {
        let report = build_report(Vec::new(), &RunStatistics::default(), config(), 0.0);
        assert_eq!(report.summary.total_records, 0);
        assert!(report.summary.latency.is_none());
        let json = seqbench_report::generate_json_report(&report).unwrap();
        assert!(json.contains("\"results\": []"));
    }
}

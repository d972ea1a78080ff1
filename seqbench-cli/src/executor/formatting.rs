//! Output Formatting
//!
//! Human-readable output for a completed run:
//! - One aligned row per record with status icon (✓/✗)
//! - Latency summary (mean, median, stddev, percentiles)
//! - Correlation of complexity and length with elapsed time

use seqbench_report::{CorrelationMetrics, Report, ReportSummary};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SeqBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    output.push_str(&format!(
        "Search: {} -db {} (outfmt {}, {} threads)\n\n",
        report.meta.config.program,
        report.meta.config.database,
        report.meta.config.outfmt,
        report.meta.config.num_threads
    ));

    if !report.results.is_empty() {
        let width = report
            .results
            .iter()
            .map(|m| m.id.len())
            .max()
            .unwrap_or(8)
            .max(8);

        output.push_str(&format!(
            "    {:<width$}  {:>10}  {:>8}  {:>12}  {:>6}\n",
            "Record",
            "Complexity",
            "Length",
            "Elapsed (s)",
            "Hits",
            width = width
        ));
        output.push_str(&format!("    {}\n", "-".repeat(width + 44)));

        for m in &report.results {
            let icon = if m.succeeded() { "✓" } else { "✗" };
            output.push_str(&format!(
                "  {} {:<width$}  {:>10}  {:>8}  {:>12.4}  {:>6}\n",
                icon,
                m.id,
                m.complexity,
                m.length,
                m.elapsed_secs,
                m.hits,
                width = width
            ));
        }
    }

    output.push_str(&format_summary(&report.summary));
    output
}

/// Format the summary block on its own
pub fn format_summary(summary: &ReportSummary) -> String {
    let mut output = String::new();

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Records: {}  Succeeded: {}  Failed: {}\n",
        summary.total_records, summary.succeeded, summary.failed
    ));

    if let Some(latency) = &summary.latency {
        output.push_str(&format!(
            "  elapsed mean: {:.4} s  median: {:.4} s  stddev: {:.4} s\n",
            latency.mean_secs, latency.median_secs, latency.std_dev_secs
        ));
        output.push_str(&format!(
            "  min: {:.4} s  max: {:.4} s  p95: {:.4} s  p99: {:.4} s\n",
            latency.min_secs, latency.max_secs, latency.p95_secs, latency.p99_secs
        ));
    }

    if let Some(c) = &summary.complexity_vs_elapsed {
        output.push_str(&format!("  complexity ~ elapsed: {}\n", format_correlation(c)));
    }
    if let Some(c) = &summary.length_vs_elapsed {
        output.push_str(&format!("  length ~ elapsed:     {}\n", format_correlation(c)));
    }

    output.push_str(&format!(
        "  Duration: {:.2} ms\n",
        summary.total_duration_ms
    ));

    output
}

fn format_correlation(c: &CorrelationMetrics) -> String {
    let fmt = |v: Option<f64>| v.map(|v| format!("{:+.3}", v)).unwrap_or_else(|| "n/a".to_string());
    format!(
        "pearson {}  spearman {}  (n = {})",
        fmt(c.pearson),
        fmt(c.spearman),
        c.n
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqbench_report::LatencyMetrics;

    #[test]
    fn test_summary_without_latency() {
        let summary = ReportSummary {
            total_records: 1,
            failed: 1,
            ..Default::default()
        };
        let text = format_summary(&summary);
        assert!(text.contains("Records: 1  Succeeded: 0  Failed: 1"));
        assert!(!text.contains("elapsed mean"));
    }

    #[test]
    fn test_summary_with_correlation() {
        let summary = ReportSummary {
            total_records: 3,
            succeeded: 3,
            latency: Some(LatencyMetrics {
                samples: 3,
                total_secs: 3.0,
                mean_secs: 1.0,
                median_secs: 1.0,
                std_dev_secs: 0.5,
                min_secs: 0.5,
                max_secs: 1.5,
                p90_secs: 1.4,
                p95_secs: 1.45,
                p99_secs: 1.49,
            }),
            complexity_vs_elapsed: Some(CorrelationMetrics {
                n: 3,
                pearson: Some(0.5),
                spearman: None,
            }),
            ..Default::default()
        };
        let text = format_summary(&summary);
        assert!(text.contains("elapsed mean: 1.0000 s"));
        assert!(text.contains("pearson +0.500  spearman n/a  (n = 3)"));
    }
}

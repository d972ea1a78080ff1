//! Host metadata for reports
//!
//! Search latency depends heavily on the machine and on how many threads
//! the tool was given, so every report records both. CPU model and memory
//! are read from `/proc` and are left as "Unknown" / 0 elsewhere.

use chrono::Utc;
use seqbench_report::{ReportConfig, ReportMeta, SystemInfo};

/// Build report metadata for a run
pub fn build_report_meta(config: ReportConfig) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system: collect_system_info(),
        config,
    }
}

fn collect_system_info() -> SystemInfo {
    let cpu_cores = std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1);

    let memory_gb = proc_field("/proc/meminfo", "MemTotal")
        .and_then(|v| v.split_whitespace().next()?.parse::<u64>().ok())
        .map(|kib| kib as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0);

    SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: proc_field("/proc/cpuinfo", "model name").unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores,
        memory_gb,
    }
}

/// Value of the first `key: value` line in a `/proc` file
fn proc_field(path: &str, key: &str) -> Option<String> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    let content = std::fs::read_to_string(path).ok()?;
    content.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        (name.trim() == key).then(|| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReportConfig {
        ReportConfig {
            input: "proteins.fa".to_string(),
            program: "blastp".to_string(),
            database: "/db/t9.faa".to_string(),
            outfmt: "6".to_string(),
            num_threads: 2,
            complexity_metric: "lempel-ziv".to_string(),
        }
    }

    #[test]
    fn test_meta_carries_config() {
        let meta = build_report_meta(config());
        assert_eq!(meta.config.program, "blastp");
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.os.is_empty());
    }

    #[test]
    fn test_missing_proc_file() {
        assert_eq!(proc_field("/nonexistent/seqbench/meminfo", "MemTotal"), None);
    }
}

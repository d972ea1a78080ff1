//! Configuration loading from seqbench.toml
//!
//! SeqBench configuration can be specified in a `seqbench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.
//! Command line flags override values from the file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "seqbench.toml";

/// SeqBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeqbenchConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// External search tool configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where records come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    /// FASTA file with the query records
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Only run records whose identifier matches this regex
    #[serde(default)]
    pub filter: Option<String>,
    /// Stop after this many records
    #[serde(default)]
    pub limit: Option<usize>,
}

/// How the external search tool is invoked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search program (looked up on PATH)
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the search flags, e.g. a container wrapper
    #[serde(default)]
    pub program_args: Vec<String>,
    /// Target database
    #[serde(default)]
    pub database: Option<PathBuf>,
    /// Output format code (`-outfmt`)
    #[serde(default = "default_outfmt")]
    pub outfmt: String,
    /// Thread count hint (`-num_threads`)
    #[serde(default = "default_num_threads")]
    pub num_threads: u32,
    /// Arguments appended after the search flags
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            program_args: Vec::new(),
            database: None,
            outfmt: default_outfmt(),
            num_threads: default_num_threads(),
            extra_args: Vec::new(),
        }
    }
}

fn default_program() -> String {
    "blastp".to_string()
}
fn default_outfmt() -> String {
    "6".to_string()
}
fn default_num_threads() -> u32 {
    2
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "tsv", "csv", "json", "human"
    #[serde(default = "default_format")]
    pub format: String,
    /// Write rows to this file instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Also save a JSON report here
    #[serde(default)]
    pub report_path: Option<PathBuf>,
    /// Print a run summary to stderr in streaming formats
    #[serde(default)]
    pub summary: bool,
    /// Omit the data row of records whose search failed
    #[serde(default)]
    pub skip_failed: bool,
    /// Show a progress spinner on stderr
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
            report_path: None,
            summary: false,
            skip_failed: false,
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "tsv".to_string()
}
fn default_progress() -> bool {
    true
}

impl SeqbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// `Ok(None)` when no `seqbench.toml` exists; a file that is found but
    /// cannot be read or parsed is an error.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let dir = std::env::current_dir()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `seqbench.toml`
    pub fn discover_from(start: &Path) -> anyhow::Result<Option<Self>> {
        for dir in start.ancestors() {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path).with_context(|| {
                    format!("Invalid configuration {}", config_path.display())
                })?;
                tracing::debug!(path = %config_path.display(), "loaded configuration");
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SeqBench Configuration

[input]
# FASTA file with one query per record
# path = "proteins.fa"
# Only run records whose identifier matches this regex (uncomment to enable)
# filter = "^sp\\|"
# Stop after this many records (uncomment to enable)
# limit = 100

[search]
# Search program, looked up on PATH
program = "blastp"
# Arguments placed before the search flags, e.g. a container wrapper
program_args = []
# Target database (required)
# database = "/data/blast/db.faa"
# Tabular output format code
outfmt = "6"
# Thread count passed to the tool
num_threads = 2
# Arguments appended after the search flags
extra_args = []

[output]
# Output format: tsv, csv, json, human
format = "tsv"
# Write rows to a file instead of stdout (uncomment to enable)
# path = "latency.tsv"
# Save a JSON report (uncomment to enable)
# report_path = "target/seqbench/report.json"
# Print a run summary to stderr in streaming formats
summary = false
# Omit the data row of records whose search failed
skip_failed = false
# Show a progress spinner on stderr
progress = true
"#
        .to_string()
    }
}

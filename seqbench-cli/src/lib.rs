#![warn(missing_docs)]
//! SeqBench CLI Library
//!
//! Command line driver for per-sequence search latency benchmarks. Each
//! record of a FASTA file is sent to an external search tool (`blastp` by
//! default) as its own query; the wall-clock time of the search is printed
//! next to the sequence's complexity score and length.
//!
//! # Example
//!
//! ```text
//! $ seqbench proteins.fa --db /data/blast/t9.features.faa
//! sp|P0A7G6|RECA_ECOLI	201	353	0.8421
//! sp|P0A9Q1|ARCA_ECOLI	150	238	0.6012
//! ```

mod config;
mod executor;
mod planner;
mod supervisor;

pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, RunStatistics, build_report, build_report_meta,
    compute_statistics, format_human_output, format_summary,
};
pub use planner::{RecordPlan, build_plan};
pub use supervisor::*;

use anyhow::Context;
use clap::{Parser, Subcommand};
use seqbench_core::{ComplexityMetric, FastaReader, LempelZiv};
use seqbench_report::{OutputFormat, ReportConfig, generate_json_report};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// SeqBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "seqbench")]
#[command(
    author,
    version,
    about = "SeqBench - per-sequence search latency vs. sequence complexity"
)]
pub struct Cli {
    /// Optional subcommand (Run, List, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input FASTA file (overrides input.path)
    pub input: Option<PathBuf>,

    /// Configuration file (default: discover seqbench.toml upwards)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target database passed to the search tool
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Search program
    #[arg(long)]
    pub program: Option<String>,

    /// Output format code passed to the search tool
    #[arg(long)]
    pub outfmt: Option<String>,

    /// Thread count passed to the search tool
    #[arg(long)]
    pub threads: Option<u32>,

    /// Output format: tsv, csv, json, human
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save a JSON report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only run records whose identifier matches this regex
    #[arg(long)]
    pub filter: Option<String>,

    /// Stop after this many records
    #[arg(long)]
    pub limit: Option<usize>,

    /// Omit the data row of records whose search failed
    #[arg(long)]
    pub skip_failed: bool,

    /// Print a run summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search every record and report latency (default)
    Run,
    /// List records with length and complexity without searching
    List {
        /// Input FASTA file
        input: Option<PathBuf>,
    },
    /// Write a default seqbench.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Fully resolved settings for one run: config file values with CLI overrides applied
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Input FASTA file
    pub input: PathBuf,
    /// Search tool invocation
    pub search: SearchCommand,
    /// Output format
    pub format: OutputFormat,
    /// Output file, stdout when `None`
    pub output: Option<PathBuf>,
    /// JSON report destination
    pub report_path: Option<PathBuf>,
    /// Record identifier filter
    pub filter: Option<String>,
    /// Record limit
    pub limit: Option<usize>,
    /// Omit rows of failed searches
    pub skip_failed: bool,
    /// Print a summary to stderr
    pub summary: bool,
    /// Show a progress spinner
    pub progress: bool,
}

/// Run the SeqBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SeqBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries result rows only
    let filter = if cli.verbose {
        "seqbench=debug,seqbench_cli=debug,seqbench_core=debug"
    } else {
        "seqbench=info,seqbench_cli=info,seqbench_core=info"
    };
    // Already initialised when embedded in a host that set up tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match &cli.config {
        Some(path) => SeqbenchConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => SeqbenchConfig::discover()
            .context("Failed to load discovered configuration")?
            .unwrap_or_default(),
    };

    match cli.command {
        Some(Commands::List { ref input }) => {
            list_records(input.as_ref().or(cli.input.as_ref()), &cli, &config)
        }
        Some(Commands::Init { force }) => init_config(force),
        Some(Commands::Run) | None => {
            let settings = resolve_settings(&cli, &config)?;
            run_benchmark(&settings)
        }
    }
}

/// Input path: CLI positional wins, then `input.path`.
pub fn resolve_input(cli: &Cli, config: &SeqbenchConfig) -> anyhow::Result<PathBuf> {
    cli.input
        .clone()
        .or_else(|| config.input.path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No input FASTA given; pass INPUT or set input.path in seqbench.toml")
        })
}

/// Layer seqbench.toml values and CLI overrides into run settings.
pub fn resolve_settings(cli: &Cli, config: &SeqbenchConfig) -> anyhow::Result<RunSettings> {
    let input = resolve_input(cli, config)?;

    let database = cli
        .db
        .clone()
        .or_else(|| config.search.database.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No search database given; pass --db or set search.database")
        })?;

    let search = SearchCommand {
        program: cli
            .program
            .clone()
            .unwrap_or_else(|| config.search.program.clone()),
        program_args: config.search.program_args.clone(),
        database,
        outfmt: cli
            .outfmt
            .clone()
            .unwrap_or_else(|| config.search.outfmt.clone()),
        num_threads: cli.threads.unwrap_or(config.search.num_threads),
        extra_args: config.search.extra_args.clone(),
    };

    let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
    let format = format_str
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)?;

    Ok(RunSettings {
        input,
        search,
        format,
        output: cli.output.clone().or_else(|| config.output.path.clone()),
        report_path: cli
            .report
            .clone()
            .or_else(|| config.output.report_path.clone()),
        filter: cli.filter.clone().or_else(|| config.input.filter.clone()),
        limit: cli.limit.or(config.input.limit),
        skip_failed: cli.skip_failed || config.output.skip_failed,
        summary: cli.summary || config.output.summary,
        progress: !cli.no_progress && config.output.progress,
    })
}

/// Execute a full run with resolved settings
pub fn run_benchmark(settings: &RunSettings) -> anyhow::Result<()> {
    let plan = build_plan(settings.filter.as_deref(), settings.limit)?;
    let reader = FastaReader::from_path(&settings.input)
        .with_context(|| format!("Failed to open input {}", settings.input.display()))?;

    let executor = Executor::new(
        settings.search.clone(),
        ExecutionConfig {
            format: settings.format,
            skip_failed: settings.skip_failed,
            show_progress: settings.progress,
        },
    );

    let mut out: Box<dyn Write> = match &settings.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output {}", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };

    tracing::info!(
        input = %settings.input.display(),
        program = %settings.search.program,
        database = %settings.search.database.display(),
        "starting run"
    );

    let start_time = Instant::now();
    let results = executor.execute(plan.select(reader), &mut *out)?;
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let stats = compute_statistics(&results);
    let report_config = ReportConfig {
        input: settings.input.display().to_string(),
        program: settings.search.program.clone(),
        database: settings.search.database.display().to_string(),
        outfmt: settings.search.outfmt.clone(),
        num_threads: settings.search.num_threads,
        complexity_metric: executor.metric().name().to_string(),
    };
    let report = build_report(results, &stats, report_config, total_duration_ms);

    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", generate_json_report(&report)?)?,
        OutputFormat::Human => write!(out, "{}", format_human_output(&report))?,
        OutputFormat::Tsv | OutputFormat::Csv => {}
    }
    out.flush()?;

    if settings.summary && settings.format.is_streaming() {
        eprint!("{}", format_summary(&report.summary));
    }

    if let Some(path) = &settings.report_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, generate_json_report(&report)?)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        tracing::info!(path = %path.display(), "report saved");
    }

    if let Some(path) = &settings.output {
        eprintln!("Results written to: {}", path.display());
    }

    Ok(())
}

/// Print `id<TAB>length<TAB>complexity` for every selected record
fn list_records(
    input: Option<&PathBuf>,
    cli: &Cli,
    config: &SeqbenchConfig,
) -> anyhow::Result<()> {
    let input = match input {
        Some(path) => path.clone(),
        None => resolve_input(cli, config)?,
    };
    let plan = build_plan(
        cli.filter.as_deref().or(config.input.filter.as_deref()),
        cli.limit.or(config.input.limit),
    )?;
    let reader = FastaReader::from_path(&input)
        .with_context(|| format!("Failed to open input {}", input.display()))?;

    let metric = LempelZiv;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut total = 0;
    for record in plan.select(reader) {
        let record = record.context("Failed to read input record")?;
        writeln!(
            out,
            "{}\t{}\t{}",
            record.id,
            record.len(),
            metric.score(&record.sequence)
        )?;
        total += 1;
    }
    out.flush()?;

    eprintln!("{} records found.", total);
    Ok(())
}

fn init_config(force: bool) -> anyhow::Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists; use --force to overwrite",
            path.display()
        ));
    }
    std::fs::write(&path, SeqbenchConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

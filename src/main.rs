//! hardoc: hardware BOM documentation quality analyzer.
//!
//! Scans checked-out hardware project trees for bill-of-materials
//! documentation and scores its quality.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hardoc::cli::{self, AnalyzeConfig, BatchConfig};
use hardoc::reports::ReportFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hardoc")]
#[command(version)]
#[command(about = "Hardware BOM documentation quality analyzer", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Quality score below --min-score
    2  Error occurred

EXAMPLES:
    # Score one project tree
    hardoc analyze path/to/project

    # Machine-readable report for CI
    hardoc analyze path/to/project -o json --min-score 0.5 > report.json

    # Score a fleet of checkouts
    hardoc batch checkouts.txt -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one checked-out project tree
    Analyze {
        /// Root of the tree to analyze
        path: PathBuf,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long = "output-file")]
        output_file: Option<PathBuf>,

        /// Fail (exit 1) if the overall score falls below this value
        #[arg(long)]
        min_score: Option<f32>,

        /// Replace all five scoring weights, e.g.
        /// "part_number=0.4,manufacturer=0.2,datasheet=0.2,alternatives=0.1,cost=0.1"
        #[arg(long)]
        weights: Option<String>,
    },

    /// Analyze many trees listed in a file, one root per line
    Batch {
        /// File listing tree roots (# comments and blank lines ignored)
        list: PathBuf,

        /// Output format
        #[arg(short = 'o', long = "output", value_enum, default_value = "summary")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long = "output-file")]
        output_file: Option<PathBuf>,

        /// Fail (exit 1) if the mean score falls below this value
        #[arg(long)]
        min_score: Option<f32>,

        /// Replace all five scoring weights
        #[arg(long)]
        weights: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    let exit_code = match cli.command {
        Commands::Analyze {
            path,
            format,
            output_file,
            min_score,
            weights,
        } => cli::run_analyze(AnalyzeConfig {
            path,
            format: format.into(),
            output_file,
            min_score,
            weights,
            no_color: cli.no_color,
        })?,
        Commands::Batch {
            list,
            format,
            output_file,
            min_score,
            weights,
        } => cli::run_batch(BatchConfig {
            list_file: list,
            format: format.into(),
            output_file,
            min_score,
            weights,
            no_color: cli.no_color,
        })?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

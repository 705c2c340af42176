//! CLI argument definitions for the scrub toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Clean, type and analyze tabular data of unknown shape",
    long_about = "Ingest CSV/JSON records of unknown shape and run them through the\n\
                  cleaning pipeline: type inference, missing-value handling, value\n\
                  normalization, deduplication, feature derivation and row validation.\n\
                  Analytics cover per-field summary statistics and z-score outliers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a file, infer field types and show a preview.
    Inspect(InspectArgs),

    /// Run the full cleaning pipeline and optionally export the result.
    Clean(CleanArgs),

    /// Clean with defaults, then report summary statistics and outliers.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to a .csv or .json file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to a .csv or .json file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Missing-value strategy: drop, impute or flag.
    ///
    /// Any other name is accepted and treated as a no-op passthrough.
    #[arg(long = "strategy", default_value = "impute")]
    pub strategy: String,

    /// Clean only these fields (comma-separated); the type map is filtered
    /// to match.
    #[arg(long = "fields", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Skip duplicate removal.
    #[arg(long = "no-dedupe")]
    pub no_dedupe: bool,

    /// Deduplicate on this composite key (comma-separated field names)
    /// instead of exact row equality.
    #[arg(long = "dedupe-keys", value_delimiter = ',')]
    pub dedupe_keys: Vec<String>,

    /// Fields that must be present and non-empty for a row to survive
    /// validation (comma-separated).
    #[arg(long = "required", value_delimiter = ',')]
    pub required: Vec<String>,

    /// Write the cleaned table to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format when --output is set.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ExportFormatArg,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a .csv or .json file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Numeric field to scan for z-score outliers.
    #[arg(long = "field", value_name = "FIELD")]
    pub field: Option<String>,

    /// Z-score threshold above which a value is an outlier.
    #[arg(long = "z-threshold", default_value_t = 3.0)]
    pub z_threshold: f64,

    /// Missing-value strategy for the cleaning run before analysis.
    #[arg(long = "strategy", default_value = "impute")]
    pub strategy: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

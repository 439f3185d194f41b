//! CLI argument definitions for the search-term optimizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ppc-optimizer",
    version,
    about = "PPC search-term optimizer - resolve cannibalization and harvest exact-match keywords",
    long_about = "Analyze an advertising search-term report.\n\n\
                  Detects search terms that trigger several campaigns or ad groups and\n\
                  recommends which target to keep, and lists non-exact terms with orders\n\
                  that have no exact-match target yet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Run the cannibalization and harvesting analyses on a report.
    Analyze(AnalyzeArgs),

    /// Show how the report's headers map to the required columns.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Search term report (CSV or XLSX with a header row).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Output directory for exported CSV files (default: <REPORT_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How much better (in percent) a challenger's ROAS must be than the
    /// sales leader's before it is kept instead.
    #[arg(
        long = "roas-threshold",
        value_name = "PCT",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(30..=200)
    )]
    pub roas_threshold: u32,

    /// Orders a high-ROAS challenger needs before it can replace the sales leader.
    #[arg(
        long = "min-orders",
        value_name = "N",
        default_value_t = 2,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub min_orders: u64,

    /// Analyze and print without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the full result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Currency symbol used when printing money amounts.
    #[arg(long = "currency", value_name = "SYMBOL", default_value = "₹")]
    pub currency: String,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Search term report (CSV or XLSX with a header row).
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

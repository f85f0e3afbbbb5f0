//! CLI argument definitions for the serovar QC tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stype",
    version,
    about = "Serovar prediction QC - classify typing results for release",
    long_about = "Post-process serovar prediction results against the built-in rule catalog.\n\n\
                  Each record receives exactly one status: PASS, REVIEW, \"REVIEW, EDGE\",\n\
                  FAIL or \"REVIEW, INCONSISTENT\". Known edge-case serovars are corrected\n\
                  before release."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Classify typing-tool result files and write report views.
    Classify(ClassifyArgs),

    /// List the built-in catalog: rules, criteria and filters.
    Rules,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Typing-tool CSV result files, concatenated in the given order.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory for report files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write the full table with every derived column.
    #[arg(long = "full")]
    pub full: bool,

    /// Also write a machine-readable JSON run report.
    #[arg(long = "json-report")]
    pub json_report: bool,
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

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}

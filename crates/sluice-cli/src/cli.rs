//! CLI argument definitions for the Sluice pipeline runner.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use sluice_config::LogFormat;

/// Command-line interface for the Sluice pipeline runner.
#[derive(Parser, Debug)]
#[command(name = "sluice", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// The action to perform.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Structured subcommands for the Sluice CLI.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Builds a pipeline from a configuration file and executes it.
    Run(RunArgs),
    /// Prints the registered component names for each role.
    List,
}

/// Arguments accepted by `sluice run`.
#[derive(Args, Debug, Clone)]
pub(crate) struct RunArgs {
    /// Path to a `.json`, `.yaml` or `.yml` configuration file.
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Utf8PathBuf,
    /// Overrides how many times the pipeline executes.
    #[arg(long, value_name = "N")]
    pub(crate) iterations: Option<u32>,
    /// Overrides the tracing filter expression.
    #[arg(long, value_name = "FILTER")]
    pub(crate) log_filter: Option<String>,
    /// Overrides the log output format (`json` or `compact`).
    #[arg(long, value_name = "FORMAT", value_parser = LogFormat::parse_name)]
    pub(crate) log_format: Option<LogFormat>,
}

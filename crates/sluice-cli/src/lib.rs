//! Command-line runtime for the Sluice pipeline runner.
//!
//! The module owns argument parsing, configuration bootstrapping, telemetry
//! installation, and pipeline execution. It is exercised both from the
//! binary entrypoint and from tests where configuration loading and IO
//! streams can be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8Path;
use clap::Parser;
use clap::error::ErrorKind;
use sluice_config::Config;
use sluice_plugins::builtin::{self, Transcript};
use sluice_plugins::{Metrics, Pipeline, Plugin, Role};
use tracing::info;

mod cli;
mod errors;
pub mod telemetry;

use cli::{Cli, CliCommand, RunArgs};
use errors::AppError;

/// Tracing target for CLI run events.
const RUN_TARGET: &str = "sluice_cli::run";

/// Loads run configuration from the path named on the command line.
pub(crate) trait ConfigLoader {
    fn load(&self, path: &Utf8Path) -> Result<Config, AppError>;
}

/// Reads configuration files from disk.
pub(crate) struct FileConfigLoader;

impl ConfigLoader for FileConfigLoader {
    fn load(&self, path: &Utf8Path) -> Result<Config, AppError> {
        Config::from_path(path).map_err(AppError::from)
    }
}

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &FileConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            drop(write!(io.stdout, "{error}"));
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            drop(write!(io.stderr, "{}", AppError::CliUsage(error)));
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        CliCommand::Run(arguments) => execute_run(&arguments, io, loader),
        CliCommand::List => write_component_names(&mut *io.stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            drop(writeln!(io.stderr, "{error}"));
            ExitCode::FAILURE
        }
    }
}

/// Layers command-line overrides over the loaded configuration.
fn resolve_config<L: ConfigLoader>(arguments: &RunArgs, loader: &L) -> Result<Config, AppError> {
    let mut config = loader.load(&arguments.config)?;
    if let Some(iterations) = arguments.iterations {
        config = config.with_iterations(iterations)?;
    }
    if let Some(filter) = arguments.log_filter.as_deref() {
        config = config.with_log_filter(filter);
    }
    if let Some(format) = arguments.log_format {
        config = config.with_log_format(format);
    }
    Ok(config)
}

fn execute_run<W, E, L>(
    arguments: &RunArgs,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> Result<(), AppError>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let config = resolve_config(arguments, loader)?;
    telemetry::initialise(&config)?;

    let transcript = Transcript::new();
    let metrics = Arc::new(Metrics::new());
    let registry = builtin::registry(transcript.clone(), Arc::clone(&metrics));
    let mut pipeline = Pipeline::build(&registry, config.pipeline())?;

    pipeline.start();
    let outcome = (0..config.iterations()).try_for_each(|_| {
        let message = pipeline.exec();
        writeln!(io.stdout, "{message}").map_err(AppError::WriteOutput)
    });
    pipeline.stop();
    outcome?;

    info!(
        target: RUN_TARGET,
        iterations = config.iterations(),
        delivered = transcript.len(),
        "pipeline run complete"
    );
    for (name, count) in metrics.snapshot() {
        info!(target: RUN_TARGET, metric = %name, count, "metric snapshot");
    }
    Ok(())
}

fn write_component_names<W: Write>(stdout: &mut W) -> Result<(), AppError> {
    let registry = builtin::registry(Transcript::new(), Arc::new(Metrics::new()));
    for role in Role::ALL {
        writeln!(stdout, "{role}: {}", registry.names(role).join(", "))
            .map_err(AppError::WriteOutput)?;
    }
    Ok(())
}

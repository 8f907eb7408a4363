//! CLI entrypoint for the Sluice pipeline runner.
//!
//! The binary delegates to [`sluice_cli::run`], which parses arguments,
//! loads configuration, and drives the configured pipeline.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    sluice_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}

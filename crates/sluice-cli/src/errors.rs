//! Error types for the CLI runtime.

use std::io;

use sluice_config::ConfigError;
use sluice_plugins::PipelineError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to build pipeline: {0}")]
    BuildPipeline(#[from] PipelineError),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

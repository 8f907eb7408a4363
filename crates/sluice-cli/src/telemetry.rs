//! Tracing subscriber installation for `sluice run`.
//!
//! Diagnostics go to stderr so stdout carries only the pipeline transcript.
//! The first successful run in a process fixes the subscriber; the handle
//! returned by later runs reports the format that is actually in effect.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use sluice_config::{Config, LogFormat};

static INSTALLED_FORMAT: OnceCell<LogFormat> = OnceCell::new();

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Proof that a global subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    format: LogFormat,
}

impl TelemetryHandle {
    /// Returns the format of the installed subscriber.
    #[must_use]
    pub const fn format(self) -> LogFormat {
        self.format
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression did not parse.
    #[error("invalid log filter '{filter}': {message}")]
    Filter {
        /// Expression taken from the configuration.
        filter: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another global subscriber was installed outside this module.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the global subscriber described by `config`.
///
/// The filter expression is validated on every call, even once a subscriber
/// is in place.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an invalid filter expression and
/// [`TelemetryError::Subscriber`] when the global default is already taken.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    INSTALLED_FORMAT
        .get_or_try_init(|| install(filter, config.log_format()))
        .map(|format| TelemetryHandle { format: *format })
}

fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        filter: expression.to_owned(),
        message: error.to_string(),
    })
}

fn install(filter: EnvFilter, format: LogFormat) -> Result<LogFormat, TelemetryError> {
    tracing::subscriber::set_global_default(build_subscriber(filter, format))
        .map_err(TelemetryError::Subscriber)?;
    Ok(format)
}

fn build_subscriber(filter: EnvFilter, format: LogFormat) -> BoxedSubscriber {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(io::stderr)
        .with_ansi(!format.is_structured() && io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    }
}

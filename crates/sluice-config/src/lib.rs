//! Run configuration for the Sluice pipeline binary.
//!
//! A [`Config`] names the three pipeline slots and carries the ambient
//! settings a run needs: the tracing filter, the log output format, and how
//! many times the pipeline executes between start and stop. Files are read
//! from JSON (`.json`) or YAML (`.yaml`, `.yml`); the format is chosen by
//! extension. Command-line values are layered on top through the `with_*`
//! overrides, which validate as they go.

use std::fmt;
use std::fs;
use std::sync::Arc;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use sluice_plugins::PipelineConfig;

mod defaults;
mod error;
mod logging;

pub use defaults::{
    DEFAULT_ITERATIONS, DEFAULT_LOG_FILTER, default_iterations, default_log_filter_string,
    default_log_format,
};
pub use error::ConfigError;
pub use logging::LogFormat;

/// Origin label used in parse errors for text that did not come from a file.
const INLINE_ORIGIN: &str = "<inline>";

/// Structured text formats accepted for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON via `serde_json`.
    Json,
    /// YAML via `serde-saphyr`.
    Yaml,
}

impl ConfigFormat {
    /// Selects the format from a file extension, ignoring ASCII case.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Returns the lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one `sluice run` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pipeline: PipelineConfig,
    #[serde(default = "default_log_filter_string")]
    log_filter: String,
    #[serde(default = "default_log_format")]
    log_format: LogFormat,
    #[serde(default = "default_iterations")]
    iterations: u32,
}

impl Config {
    /// Creates a configuration with default ambient settings.
    #[must_use]
    pub fn new(pipeline: PipelineConfig) -> Self {
        Self {
            pipeline,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            iterations: default_iterations(),
        }
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
    /// [`ConfigError::Read`] when the file cannot be read, and the errors of
    /// [`Config::parse`] otherwise.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_owned(),
        })?;
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source: Arc::new(source),
        })?;
        Self::parse_with_origin(&text, format, path.as_str())
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed text and
    /// [`ConfigError::ZeroIterations`] when `iterations` is `0`.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::parse_with_origin(text, format, INLINE_ORIGIN)
    }

    fn parse_with_origin(
        text: &str,
        format: ConfigFormat,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse {
            format,
            origin: origin.to_owned(),
            message,
        };
        let config: Self = match format {
            ConfigFormat::Json => {
                serde_json::from_str(text).map_err(|error| parse_error(error.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_saphyr::from_str(text).map_err(|error| parse_error(error.to_string()))?
            }
        };
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(self)
    }

    /// Replaces the iteration count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroIterations`] when `iterations` is `0`.
    pub fn with_iterations(mut self, iterations: u32) -> Result<Self, ConfigError> {
        self.iterations = iterations;
        self.validated()
    }

    /// Replaces the log filter expression.
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }

    /// Replaces the log output format.
    #[must_use]
    pub const fn with_log_format(mut self, log_format: LogFormat) -> Self {
        self.log_format = log_format;
        self
    }

    /// Returns the pipeline slot configuration.
    #[must_use]
    pub const fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Returns the tracing filter expression.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns how many times the pipeline executes per run.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

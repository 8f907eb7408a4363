use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating run configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: Arc<io::Error>,
    },
    /// The configuration text was not valid for its format.
    #[error("failed to parse {format} configuration {origin}: {message}")]
    Parse {
        /// Format the text was parsed as.
        format: crate::ConfigFormat,
        /// File path, or `<inline>` for in-memory text.
        origin: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The file extension does not name a supported format.
    #[error("unsupported configuration format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Offending file path.
        path: Utf8PathBuf,
    },
    /// The run was asked to execute the pipeline zero times.
    #[error("iterations must be at least 1")]
    ZeroIterations,
}

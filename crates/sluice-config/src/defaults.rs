use std::num::NonZeroU32;

use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default number of times a run executes the pipeline.
pub const DEFAULT_ITERATIONS: NonZeroU32 = NonZeroU32::MIN;

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default iteration count as stored in configuration files.
#[must_use]
pub const fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS.get()
}

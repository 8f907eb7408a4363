//! Diagnostic output formats for `sluice run`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

/// Shape of the tracing events a run writes to stderr.
///
/// The pipeline transcript always goes to stdout; the format only affects
/// the diagnostics emitted alongside it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    PartialEq,
    Eq,
    AsRefStr,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event, ready for a log shipper.
    #[default]
    Json,
    /// One human-readable line per event.
    Compact,
}

impl LogFormat {
    /// Parses a format name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns a message naming every accepted format when `text` matches
    /// none of them.
    pub fn parse_name(text: &str) -> Result<Self, String> {
        text.parse().map_err(|_| {
            format!(
                "unknown log format '{text}' (expected one of: {})",
                Self::VARIANTS.join(", ")
            )
        })
    }

    /// Returns `true` when events are emitted as machine-readable records.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

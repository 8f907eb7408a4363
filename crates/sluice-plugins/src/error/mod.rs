//! Domain errors raised while assembling pipelines.
//!
//! Errors use a `thiserror`-derived enum with structured context so callers
//! can inspect the unresolved role and name programmatically.

use thiserror::Error;

use crate::lifecycle::Role;

/// Errors arising from pipeline construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No constructor is registered for the requested role and name.
    #[error("no {role} plugin registered under '{name}'")]
    NotFound {
        /// Role of the slot being resolved.
        role: Role,
        /// Symbolic name that was looked up.
        name: String,
    },

    /// A slot config was handed to the factory of a different role.
    #[error("{expected} factory cannot build a slot configured as {requested} ('{name}')")]
    RoleMismatch {
        /// Role served by the factory.
        expected: Role,
        /// Role named by the slot config.
        requested: Role,
        /// Symbolic name carried by the slot config.
        name: String,
    },
}

impl PipelineError {
    /// Returns the role and name that could not be resolved, if any.
    #[must_use]
    pub const fn unresolved(&self) -> Option<(Role, &str)> {
        match self {
            Self::NotFound { role, name } => Some((*role, name.as_str())),
            Self::RoleMismatch { .. } => None,
        }
    }
}

//! Pipeline configuration, construction, and execution.
//!
//! A [`Pipeline`] owns exactly one input, one filter, and one output. It is
//! built all-or-nothing from a [`PipelineConfig`] through the per-role
//! factories, started downstream-first, stopped upstream-first, and executes
//! one message end-to-end per [`Pipeline::exec`] call.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::factory::{FilterFactory, InputFactory, OutputFactory, PluginFactory};
use crate::lifecycle::{Filter, Input, Output, Plugin, Role, Status};
use crate::registry::ComponentRegistry;

/// Tracing target for pipeline operations.
const PIPELINE_TARGET: &str = "sluice_plugins::pipeline";

/// Declarative request for one pipeline slot.
///
/// # Example
///
/// ```
/// use sluice_plugins::{Role, SlotConfig};
///
/// let slot: SlotConfig = serde_json::from_str(r#"{"role":"filter","name":"upper"}"#)
///     .expect("valid slot");
/// assert_eq!(slot, SlotConfig::filter("upper"));
/// assert_eq!(slot.role(), Role::Filter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    role: Role,
    name: String,
}

impl SlotConfig {
    /// Creates a slot config for any role.
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
        }
    }

    /// Creates an input slot config.
    #[must_use]
    pub fn input(name: impl Into<String>) -> Self {
        Self::new(Role::Input, name)
    }

    /// Creates a filter slot config.
    #[must_use]
    pub fn filter(name: impl Into<String>) -> Self {
        Self::new(Role::Filter, name)
    }

    /// Creates an output slot config.
    #[must_use]
    pub fn output(name: impl Into<String>) -> Self {
        Self::new(Role::Output, name)
    }

    /// Returns the requested role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the symbolic component name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Slot configs for the three pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    input: SlotConfig,
    filter: SlotConfig,
    output: SlotConfig,
}

impl PipelineConfig {
    /// Groups the three slot configs.
    #[must_use]
    pub const fn new(input: SlotConfig, filter: SlotConfig, output: SlotConfig) -> Self {
        Self {
            input,
            filter,
            output,
        }
    }

    /// Returns the input slot config.
    #[must_use]
    pub const fn input(&self) -> &SlotConfig {
        &self.input
    }

    /// Returns the filter slot config.
    #[must_use]
    pub const fn filter(&self) -> &SlotConfig {
        &self.filter
    }

    /// Returns the output slot config.
    #[must_use]
    pub const fn output(&self) -> &SlotConfig {
        &self.output
    }
}

/// Lifecycle states of a pipeline's three children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildStatuses {
    /// Status reported by the input.
    pub input: Status,
    /// Status reported by the filter.
    pub filter: Status,
    /// Status reported by the output.
    pub output: Status,
}

impl ChildStatuses {
    /// Returns `true` when all three children report `status`.
    #[must_use]
    pub fn all(self, status: Status) -> bool {
        self.input == status && self.filter == status && self.output == status
    }
}

/// A built input → filter → output chain.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use sluice_plugins::builtin::{self, Transcript};
/// use sluice_plugins::{Metrics, Pipeline, PipelineConfig, PipelineError, Role, SlotConfig};
///
/// let registry = builtin::registry(Transcript::new(), Arc::new(Metrics::new()));
/// let config = PipelineConfig::new(
///     SlotConfig::input("doesnotexist"),
///     SlotConfig::filter("upper"),
///     SlotConfig::output("console"),
/// );
///
/// let error = Pipeline::build(&registry, &config).expect_err("unknown input");
/// assert_eq!(error.unresolved(), Some((Role::Input, "doesnotexist")));
/// ```
pub struct Pipeline {
    status: Status,
    input: Box<dyn Input>,
    filter: Box<dyn Filter>,
    output: Box<dyn Output>,
}

impl Pipeline {
    /// Resolves every slot of `config` and assembles a stopped pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first [`PipelineError`] raised while resolving the input,
    /// filter, and output slots, in that order. No pipeline is produced when
    /// any slot fails.
    pub fn build(
        registry: &ComponentRegistry,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let input = InputFactory::new(registry).create(config.input())?;
        let filter = FilterFactory::new(registry).create(config.filter())?;
        let output = OutputFactory::new(registry).create(config.output())?;
        debug!(
            target: PIPELINE_TARGET,
            input = config.input().name(),
            filter = config.filter().name(),
            output = config.output().name(),
            "pipeline built"
        );
        Ok(Self::from_parts(input, filter, output))
    }

    /// Assembles a stopped pipeline from already constructed stages.
    #[must_use]
    pub const fn from_parts(
        input: Box<dyn Input>,
        filter: Box<dyn Filter>,
        output: Box<dyn Output>,
    ) -> Self {
        Self {
            status: Status::Stopped,
            input,
            filter,
            output,
        }
    }

    /// Moves one message from the input, through the filter, to the output.
    ///
    /// Returns the message handed to the output. Calling this while the
    /// pipeline is stopped is allowed; the input decides what it yields.
    pub fn exec(&mut self) -> String {
        if !self.status.is_started() {
            warn!(
                target: PIPELINE_TARGET,
                status = %self.status,
                "executing a pipeline that is not started"
            );
        }
        let received = self.input.receive();
        let processed = self.filter.process(&received);
        self.output.send(&processed);
        processed
    }

    /// Returns the lifecycle state of each child.
    #[must_use]
    pub fn child_statuses(&self) -> ChildStatuses {
        ChildStatuses {
            input: self.input.status(),
            filter: self.filter.status(),
            output: self.output.status(),
        }
    }
}

impl Plugin for Pipeline {
    fn start(&mut self) {
        self.output.start();
        self.filter.start();
        self.input.start();
        self.status = Status::Started;
        info!(target: PIPELINE_TARGET, "pipeline started");
    }

    fn stop(&mut self) {
        self.input.stop();
        self.filter.stop();
        self.output.stop();
        self.status = Status::Stopped;
        info!(target: PIPELINE_TARGET, "pipeline stopped");
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("status", &self.status)
            .field("children", &self.child_statuses())
            .finish_non_exhaustive()
    }
}

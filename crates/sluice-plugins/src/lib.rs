//! Plugin pipeline assembly and execution for Sluice.
//!
//! The `sluice-plugins` crate builds a three-stage pipeline (input, filter,
//! output) from a declarative [`PipelineConfig`]. Each slot names a role and a
//! symbolic component name; the per-role factories resolve those names
//! through a [`ComponentRegistry`] of constructor closures and hand back
//! freshly allocated plugins. Construction is all-or-nothing: an unregistered
//! name aborts the whole build with [`PipelineError::NotFound`].
//!
//! Every stage implements the [`Plugin`] lifecycle (start, stop, status) plus
//! one data operation. The [`adapter`] module exposes poll-based consumers as
//! inputs, and the [`decorator`] module layers metric collection over inputs
//! without the wrapped value's knowledge.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use sluice_plugins::builtin::{self, Transcript};
//! use sluice_plugins::{Metrics, Pipeline, PipelineConfig, Plugin, SlotConfig};
//!
//! let transcript = Transcript::new();
//! let registry = builtin::registry(transcript.clone(), Arc::new(Metrics::new()));
//! let config = PipelineConfig::new(
//!     SlotConfig::input("hello"),
//!     SlotConfig::filter("upper"),
//!     SlotConfig::output("console"),
//! );
//!
//! let mut pipeline = Pipeline::build(&registry, &config).expect("all names registered");
//! pipeline.start();
//! pipeline.exec();
//! pipeline.stop();
//! assert_eq!(transcript.last().as_deref(), Some("HELLO WORLD"));
//! ```

pub mod adapter;
pub mod builtin;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod metrics;
pub mod pipeline;
pub mod registry;

#[cfg(test)]
mod tests;

pub use self::adapter::{Consumer, ConsumerInput, FixedConsumer, Records};
pub use self::decorator::{EchoInput, MeteredInput, MetricDecorator, NamedInput};
pub use self::error::PipelineError;
pub use self::factory::{FilterFactory, InputFactory, OutputFactory, PluginFactory};
pub use self::lifecycle::{Filter, Input, Output, Plugin, Role, Status};
pub use self::metrics::Metrics;
pub use self::pipeline::{ChildStatuses, Pipeline, PipelineConfig, SlotConfig};
pub use self::registry::{ComponentRegistry, Constructor, Registration};

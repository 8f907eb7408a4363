//! Metric-collecting decorators.
//!
//! [`MetricDecorator`] wraps any [`NamedInput`] and counts each call under
//! the call's argument. [`MeteredInput`] does the same for pipeline
//! [`Input`]s under a fixed key. Both forward to the wrapped value first and
//! count afterwards; nesting decorators stacks the counting, one increment
//! per layer.

use std::sync::Arc;

use tracing::debug;

use crate::lifecycle::{Input, Plugin, Status};
use crate::metrics::Metrics;

/// Tracing target for decorator operations.
const DECORATOR_TARGET: &str = "sluice_plugins::decorator";

/// An input that receives under an event name.
///
/// Calls take `&self` so one decorated chain can be shared across threads.
pub trait NamedInput: Send + Sync {
    /// Receives an event identified by `name`.
    fn receive_named(&self, name: &str);
}

impl<T: NamedInput + ?Sized> NamedInput for &T {
    fn receive_named(&self, name: &str) {
        (**self).receive_named(name);
    }
}

impl<T: NamedInput + ?Sized> NamedInput for Box<T> {
    fn receive_named(&self, name: &str) {
        (**self).receive_named(name);
    }
}

impl<T: NamedInput + ?Sized> NamedInput for Arc<T> {
    fn receive_named(&self, name: &str) {
        (**self).receive_named(name);
    }
}

/// Base [`NamedInput`] that only records a trace event.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoInput;

impl NamedInput for EchoInput {
    fn receive_named(&self, name: &str) {
        debug!(target: DECORATOR_TARGET, name, "received");
    }
}

/// Counts every call of the wrapped [`NamedInput`] in shared [`Metrics`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use sluice_plugins::{EchoInput, Metrics, MetricDecorator, NamedInput};
///
/// let metrics = Arc::new(Metrics::new());
/// let once = MetricDecorator::new(EchoInput, Arc::clone(&metrics));
/// let twice = MetricDecorator::new(once, Arc::clone(&metrics));
/// twice.receive_named("hello");
/// assert_eq!(metrics.count("hello"), 2);
/// ```
#[derive(Debug)]
pub struct MetricDecorator<T> {
    inner: T,
    metrics: Arc<Metrics>,
}

impl<T: NamedInput> MetricDecorator<T> {
    /// Wraps `inner`, counting into `metrics`.
    #[must_use]
    pub const fn new(inner: T, metrics: Arc<Metrics>) -> Self {
        Self { inner, metrics }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwraps the decorator.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: NamedInput> NamedInput for MetricDecorator<T> {
    fn receive_named(&self, name: &str) {
        self.inner.receive_named(name);
        self.metrics.inc(name);
    }
}

/// Counts every receive of the wrapped pipeline [`Input`] under a fixed key.
///
/// Lifecycle calls pass straight through, so the decorator reports the
/// wrapped input's status.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use sluice_plugins::builtin::HelloInput;
/// use sluice_plugins::{Input, MeteredInput, Metrics};
///
/// let metrics = Arc::new(Metrics::new());
/// let mut input = MeteredInput::new(HelloInput::default(), Arc::clone(&metrics), "hello");
/// assert_eq!(input.receive(), "Hello World");
/// assert_eq!(metrics.count("hello"), 1);
/// ```
#[derive(Debug)]
pub struct MeteredInput<I> {
    inner: I,
    metrics: Arc<Metrics>,
    key: String,
}

impl<I: Input> MeteredInput<I> {
    /// Wraps `inner`, counting each receive under `key`.
    #[must_use]
    pub fn new(inner: I, metrics: Arc<Metrics>, key: impl Into<String>) -> Self {
        Self {
            inner,
            metrics,
            key: key.into(),
        }
    }

    /// Returns the metric key.
    #[must_use]
    pub const fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the wrapped input.
    #[must_use]
    pub const fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Input> Plugin for MeteredInput<I> {
    fn start(&mut self) {
        self.inner.start();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }

    fn status(&self) -> Status {
        self.inner.status()
    }
}

impl<I: Input> Input for MeteredInput<I> {
    fn receive(&mut self) -> String {
        let message = self.inner.receive();
        self.metrics.inc(&self.key);
        message
    }
}

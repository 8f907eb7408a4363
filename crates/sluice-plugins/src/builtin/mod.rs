//! Built-in plugins and the default registry.
//!
//! These implementations cover the stock `hello` → `upper` → `console`
//! pipeline plus a consumer-backed input and a metered input. They are
//! registered together by [`registry`].

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::adapter::{ConsumerInput, FixedConsumer};
use crate::decorator::MeteredInput;
use crate::lifecycle::{Filter, Input, Output, Plugin, Status};
use crate::metrics::Metrics;
use crate::registry::ComponentRegistry;

/// Tracing target for built-in plugins.
const BUILTIN_TARGET: &str = "sluice_plugins::builtin";

/// Text emitted by [`HelloInput`] on every receive.
pub const HELLO_MESSAGE: &str = "Hello World";

/// Item returned by the consumer behind the built-in `consumer` input.
pub const CONSUMER_MESSAGE: &str = "i am a fixed consumer.";

/// Metric key incremented by the built-in `metered-hello` input.
pub const METERED_HELLO_KEY: &str = "hello";

macro_rules! lifecycle_impl {
    ($ty:ty, $label:literal) => {
        impl Plugin for $ty {
            fn start(&mut self) {
                self.status = Status::Started;
                debug!(target: BUILTIN_TARGET, plugin = $label, "plugin started");
            }

            fn stop(&mut self) {
                self.status = Status::Stopped;
                debug!(target: BUILTIN_TARGET, plugin = $label, "plugin stopped");
            }

            fn status(&self) -> Status {
                self.status
            }
        }
    };
}

/// Input that always produces [`HELLO_MESSAGE`].
#[derive(Debug, Default)]
pub struct HelloInput {
    status: Status,
}

lifecycle_impl!(HelloInput, "hello");

impl Input for HelloInput {
    fn receive(&mut self) -> String {
        HELLO_MESSAGE.to_owned()
    }
}

/// Filter that uppercases every message.
#[derive(Debug, Default)]
pub struct UpperFilter {
    status: Status,
}

lifecycle_impl!(UpperFilter, "upper");

impl Filter for UpperFilter {
    fn process(&self, message: &str) -> String {
        message.to_uppercase()
    }
}

/// Filter that returns messages unchanged.
#[derive(Debug, Default)]
pub struct PassthroughFilter {
    status: Status,
}

lifecycle_impl!(PassthroughFilter, "passthrough");

impl Filter for PassthroughFilter {
    fn process(&self, message: &str) -> String {
        message.to_owned()
    }
}

/// Shared, append-only record of messages delivered to a [`ConsoleOutput`].
///
/// Clones share the same underlying buffer.
///
/// # Example
///
/// ```
/// use sluice_plugins::builtin::Transcript;
///
/// let transcript = Transcript::new();
/// let writer = transcript.clone();
/// writer.record("first");
/// assert_eq!(transcript.messages(), vec![String::from("first")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn record(&self, message: &str) {
        // Poisoning cannot leave the buffer inconsistent.
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }

    /// Returns a copy of every recorded message in delivery order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recently recorded message.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns the number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output that records every message in a [`Transcript`].
#[derive(Debug, Default)]
pub struct ConsoleOutput {
    status: Status,
    transcript: Transcript,
}

impl ConsoleOutput {
    /// Creates an output writing to the given transcript.
    #[must_use]
    pub const fn new(transcript: Transcript) -> Self {
        Self {
            status: Status::Stopped,
            transcript,
        }
    }

    /// Returns the transcript this output records into.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

lifecycle_impl!(ConsoleOutput, "console");

impl Output for ConsoleOutput {
    fn send(&mut self, message: &str) {
        info!(target: BUILTIN_TARGET, plugin = "console", payload = message, "message delivered");
        self.transcript.record(message);
    }
}

/// Builds the registry of built-in plugins.
///
/// | Role   | Name            | Plugin |
/// |--------|-----------------|--------|
/// | input  | `hello`         | [`HelloInput`] |
/// | input  | `consumer`      | [`ConsumerInput`] over a [`FixedConsumer`] |
/// | input  | `metered-hello` | [`MeteredInput`] over a [`HelloInput`] |
/// | filter | `upper`         | [`UpperFilter`] |
/// | filter | `passthrough`   | [`PassthroughFilter`] |
/// | output | `console`       | [`ConsoleOutput`] |
///
/// Every `console` output built from this registry shares `transcript`, and
/// every `metered-hello` input shares `metrics`.
#[must_use]
pub fn registry(transcript: Transcript, metrics: Arc<Metrics>) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register_input("hello", || Box::new(HelloInput::default()));
    registry.register_input("consumer", || {
        Box::new(ConsumerInput::new(FixedConsumer::new([CONSUMER_MESSAGE])))
    });
    registry.register_input("metered-hello", move || {
        Box::new(MeteredInput::new(
            HelloInput::default(),
            Arc::clone(&metrics),
            METERED_HELLO_KEY,
        ))
    });
    registry.register_filter("upper", || Box::new(UpperFilter::default()));
    registry.register_filter("passthrough", || Box::new(PassthroughFilter::default()));
    registry.register_output("console", move || {
        Box::new(ConsoleOutput::new(transcript.clone()))
    });
    registry
}

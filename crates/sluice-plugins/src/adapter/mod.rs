//! Adapter exposing poll-based consumers as pipeline inputs.
//!
//! A [`Consumer`] hands out batches of opaque text items when polled.
//! [`ConsumerInput`] translates that shape into the receive-based [`Input`]
//! contract by joining each batch with [`RECORD_DELIMITER`].

use tracing::{debug, warn};

use crate::lifecycle::{Input, Plugin, Status};

/// Tracing target for adapter operations.
const ADAPTER_TARGET: &str = "sluice_plugins::adapter";

/// Separator placed between items of one polled batch.
pub const RECORD_DELIMITER: &str = ",";

/// A batch of opaque text items returned by one poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Records {
    items: Vec<String>,
}

impl Records {
    /// Creates a batch from the given items.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the items in poll order.
    #[must_use]
    pub const fn items(&self) -> &[String] {
        self.items.as_slice()
    }

    /// Returns `true` when the batch carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Joins the items with [`RECORD_DELIMITER`].
    #[must_use]
    pub fn join(&self) -> String {
        self.items.join(RECORD_DELIMITER)
    }
}

/// A poll-based data source, such as a message queue client.
///
/// Consumers are assumed always ready; the adapter never starts or stops
/// them.
pub trait Consumer: Send {
    /// Returns the next batch of records.
    fn poll(&mut self) -> Records;
}

impl<T: Consumer + ?Sized> Consumer for Box<T> {
    fn poll(&mut self) -> Records {
        (**self).poll()
    }
}

/// Consumer returning the same batch on every poll.
///
/// # Example
///
/// ```
/// use sluice_plugins::{Consumer, FixedConsumer};
///
/// let mut consumer = FixedConsumer::new(["a", "b"]);
/// assert_eq!(consumer.poll().join(), "a,b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedConsumer {
    records: Records,
}

impl FixedConsumer {
    /// Creates a consumer that replays the given items.
    #[must_use]
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: Records::new(items),
        }
    }
}

impl Consumer for FixedConsumer {
    fn poll(&mut self) -> Records {
        self.records.clone()
    }
}

/// Input adapter over a [`Consumer`].
///
/// Start and stop only flip the adapter's own status. While stopped,
/// [`Input::receive`] returns an empty string without polling.
///
/// # Example
///
/// ```
/// use sluice_plugins::{ConsumerInput, FixedConsumer, Input, Plugin};
///
/// let mut input = ConsumerInput::new(FixedConsumer::new(["one", "two"]));
/// assert_eq!(input.receive(), "");
/// input.start();
/// assert_eq!(input.receive(), "one,two");
/// ```
#[derive(Debug)]
pub struct ConsumerInput<C> {
    status: Status,
    consumer: C,
}

impl<C: Consumer> ConsumerInput<C> {
    /// Wraps a consumer. The adapter starts out stopped.
    #[must_use]
    pub const fn new(consumer: C) -> Self {
        Self {
            status: Status::Stopped,
            consumer,
        }
    }

    /// Returns the wrapped consumer.
    #[must_use]
    pub const fn consumer(&self) -> &C {
        &self.consumer
    }
}

impl<C: Consumer> Plugin for ConsumerInput<C> {
    fn start(&mut self) {
        self.status = Status::Started;
        debug!(target: ADAPTER_TARGET, "consumer input started");
    }

    fn stop(&mut self) {
        self.status = Status::Stopped;
        debug!(target: ADAPTER_TARGET, "consumer input stopped");
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl<C: Consumer> Input for ConsumerInput<C> {
    fn receive(&mut self) -> String {
        if !self.status.is_started() {
            warn!(
                target: ADAPTER_TARGET,
                status = %self.status,
                "consumer input is not running, receiving nothing"
            );
            return String::new();
        }
        self.consumer.poll().join()
    }
}

#[cfg(test)]
mod tests;

//! Capability traits shared by every pipeline stage.
//!
//! [`Plugin`] is the lifecycle contract. [`Input`], [`Filter`], and
//! [`Output`] each extend it with one data operation, matching the three
//! [`Role`]s a pipeline slot can take.

use serde::{Deserialize, Serialize};

/// Lifecycle state owned by every plugin.
///
/// # Example
///
/// ```
/// use sluice_plugins::Status;
///
/// assert_eq!(Status::default(), Status::Stopped);
/// assert_eq!(Status::Started.as_str(), "started");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not accepting work. Every plugin starts here.
    #[default]
    Stopped,
    /// Running and ready to move data.
    Started,
}

impl Status {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Started => "started",
        }
    }

    /// Returns `true` for [`Status::Started`].
    #[must_use]
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a plugin within a pipeline.
///
/// # Example
///
/// ```
/// use sluice_plugins::Role;
///
/// assert_eq!(Role::Filter.to_string(), "filter");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Produces messages.
    Input,
    /// Transforms messages.
    Filter,
    /// Consumes messages.
    Output,
}

impl Role {
    /// All roles in data-flow order.
    pub const ALL: [Self; 3] = [Self::Input, Self::Filter, Self::Output];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Filter => "filter",
            Self::Output => "output",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle control implemented by every stage.
///
/// Implementations must tolerate redundant calls: starting a started plugin
/// or stopping a stopped one leaves it in the requested state.
pub trait Plugin: Send {
    /// Moves the plugin to [`Status::Started`].
    fn start(&mut self);

    /// Moves the plugin to [`Status::Stopped`].
    fn stop(&mut self);

    /// Reports the current lifecycle state.
    fn status(&self) -> Status;
}

/// A stage that produces one message per call.
pub trait Input: Plugin {
    /// Receives the next message.
    fn receive(&mut self) -> String;
}

/// A stage that transforms a message.
pub trait Filter: Plugin {
    /// Processes a message and returns the transformed text.
    fn process(&self, message: &str) -> String;
}

/// A stage that delivers a message to its sink.
pub trait Output: Plugin {
    /// Sends a message downstream.
    fn send(&mut self, message: &str);
}

impl<T: Plugin + ?Sized> Plugin for Box<T> {
    fn start(&mut self) {
        (**self).start();
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn status(&self) -> Status {
        (**self).status()
    }
}

impl<T: Input + ?Sized> Input for Box<T> {
    fn receive(&mut self) -> String {
        (**self).receive()
    }
}

impl<T: Filter + ?Sized> Filter for Box<T> {
    fn process(&self, message: &str) -> String {
        (**self).process(message)
    }
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn send(&mut self, message: &str) {
        (**self).send(message);
    }
}

#[cfg(test)]
mod tests;

//! Component registry mapping (role, name) pairs to constructors.
//!
//! The [`ComponentRegistry`] decouples symbolic configuration from concrete
//! plugin types. It is populated once before any pipeline is built and read
//! thereafter. Each entry is a constructor closure producing a freshly
//! allocated, correctly typed plugin, so construction stays statically
//! checked per role.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::lifecycle::{Filter, Input, Output, Role};

/// Tracing target for registry operations.
const REGISTRY_TARGET: &str = "sluice_plugins::registry";

/// Closure producing a fresh input plugin.
pub type InputConstructor = Box<dyn Fn() -> Box<dyn Input> + Send + Sync>;
/// Closure producing a fresh filter plugin.
pub type FilterConstructor = Box<dyn Fn() -> Box<dyn Filter> + Send + Sync>;
/// Closure producing a fresh output plugin.
pub type OutputConstructor = Box<dyn Fn() -> Box<dyn Output> + Send + Sync>;

/// A role-tagged constructor.
///
/// The variant determines the role, so an input constructor can never be
/// filed under the filter role.
pub enum Constructor {
    /// Builds [`Input`] plugins.
    Input(InputConstructor),
    /// Builds [`Filter`] plugins.
    Filter(FilterConstructor),
    /// Builds [`Output`] plugins.
    Output(OutputConstructor),
}

impl Constructor {
    /// Wraps an input constructor closure.
    pub fn input<F>(constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Input> + Send + Sync + 'static,
    {
        Self::Input(Box::new(constructor))
    }

    /// Wraps a filter constructor closure.
    pub fn filter<F>(constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Filter> + Send + Sync + 'static,
    {
        Self::Filter(Box::new(constructor))
    }

    /// Wraps an output constructor closure.
    pub fn output<F>(constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Output> + Send + Sync + 'static,
    {
        Self::Output(Box::new(constructor))
    }

    /// Returns the role this constructor serves.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Input(_) => Role::Input,
            Self::Filter(_) => Role::Filter,
            Self::Output(_) => Role::Output,
        }
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constructor").field(&self.role()).finish()
    }
}

/// A (role, name, constructor) triple supplied by a collaborator.
#[derive(Debug)]
pub struct Registration {
    name: String,
    constructor: Constructor,
}

impl Registration {
    /// Creates a registration for the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, constructor: Constructor) -> Self {
        Self {
            name: name.into(),
            constructor,
        }
    }

    /// Returns the symbolic name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the role implied by the constructor.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.constructor.role()
    }
}

/// Registry of constructors keyed by role and symbolic name.
///
/// Registering an existing (role, name) pair replaces the previous entry.
///
/// # Example
///
/// ```
/// use sluice_plugins::builtin::UpperFilter;
/// use sluice_plugins::{ComponentRegistry, Role};
///
/// let mut registry = ComponentRegistry::new();
/// registry.register_filter("upper", || Box::new(UpperFilter::default()));
/// assert!(registry.contains(Role::Filter, "upper"));
/// assert!(!registry.contains(Role::Input, "upper"));
/// ```
#[derive(Default)]
pub struct ComponentRegistry {
    by_role: HashMap<Role, HashMap<String, Constructor>>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of registrations, applied in order.
    #[must_use]
    pub fn from_registrations<I>(registrations: I) -> Self
    where
        I: IntoIterator<Item = Registration>,
    {
        let mut registry = Self::new();
        for registration in registrations {
            registry.register(registration.name, registration.constructor);
        }
        registry
    }

    /// Records a constructor under its role and the given name.
    ///
    /// Returns `true` when an earlier entry for the same pair was replaced.
    pub fn register(&mut self, name: impl Into<String>, constructor: Constructor) -> bool {
        let role = constructor.role();
        let key_name: String = name.into();
        let replaced = self
            .by_role
            .entry(role)
            .or_default()
            .insert(key_name.clone(), constructor)
            .is_some();
        debug!(
            target: REGISTRY_TARGET,
            role = %role,
            name = %key_name,
            replaced,
            "registered plugin constructor"
        );
        replaced
    }

    /// Registers an input constructor.
    pub fn register_input<F>(&mut self, name: impl Into<String>, constructor: F) -> bool
    where
        F: Fn() -> Box<dyn Input> + Send + Sync + 'static,
    {
        self.register(name, Constructor::input(constructor))
    }

    /// Registers a filter constructor.
    pub fn register_filter<F>(&mut self, name: impl Into<String>, constructor: F) -> bool
    where
        F: Fn() -> Box<dyn Filter> + Send + Sync + 'static,
    {
        self.register(name, Constructor::filter(constructor))
    }

    /// Registers an output constructor.
    pub fn register_output<F>(&mut self, name: impl Into<String>, constructor: F) -> bool
    where
        F: Fn() -> Box<dyn Output> + Send + Sync + 'static,
    {
        self.register(name, Constructor::output(constructor))
    }

    /// Looks up the constructor registered for a role and name.
    #[must_use]
    pub fn resolve(&self, role: Role, name: &str) -> Option<&Constructor> {
        self.by_role.get(&role)?.get(name)
    }

    /// Returns `true` when a constructor exists for the role and name.
    #[must_use]
    pub fn contains(&self, role: Role, name: &str) -> bool {
        self.resolve(role, name).is_some()
    }

    /// Returns the names registered for a role, sorted alphabetically.
    #[must_use]
    pub fn names(&self, role: Role) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .by_role
            .get(&role)
            .map_or_else(Vec::new, |entries| {
                entries.keys().map(String::as_str).collect()
            });
        names.sort_unstable();
        names
    }

    /// Returns the number of registered constructors across all roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_role.values().map(HashMap::len).sum()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_role.values().all(HashMap::is_empty)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("inputs", &self.names(Role::Input))
            .field("filters", &self.names(Role::Filter))
            .field("outputs", &self.names(Role::Output))
            .finish()
    }
}

#[cfg(test)]
mod tests;

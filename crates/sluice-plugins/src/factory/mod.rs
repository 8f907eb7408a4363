//! Per-role factories turning slot configs into live plugins.
//!
//! Each factory borrows the [`ComponentRegistry`], resolves the slot's name
//! under its own role, and invokes the registered constructor. No state is
//! kept between calls, so every [`PluginFactory::create`] yields a fresh
//! instance.

use tracing::debug;

use crate::error::PipelineError;
use crate::lifecycle::{Filter, Input, Output, Role};
use crate::pipeline::SlotConfig;
use crate::registry::{ComponentRegistry, Constructor};

/// Tracing target for factory operations.
const FACTORY_TARGET: &str = "sluice_plugins::factory";

/// Abstract factory producing plugins of one role.
///
/// # Example
///
/// ```
/// use sluice_plugins::builtin::HelloInput;
/// use sluice_plugins::{ComponentRegistry, InputFactory, PluginFactory, SlotConfig};
///
/// let mut registry = ComponentRegistry::new();
/// registry.register_input("hello", || Box::new(HelloInput::default()));
///
/// let factory = InputFactory::new(&registry);
/// let mut input = factory.create(&SlotConfig::input("hello")).expect("registered");
/// assert_eq!(input.receive(), "Hello World");
/// ```
pub trait PluginFactory {
    /// Capability produced by the factory.
    type Product: ?Sized;

    /// Returns the role this factory serves.
    fn role(&self) -> Role;

    /// Builds a fresh plugin for the slot.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::RoleMismatch`] when the slot names another
    /// role, or [`PipelineError::NotFound`] when its name is unregistered.
    fn create(&self, slot: &SlotConfig) -> Result<Box<Self::Product>, PipelineError>;
}

/// Looks up the constructor for a slot after checking the factory's role.
fn lookup<'r>(
    registry: &'r ComponentRegistry,
    role: Role,
    slot: &SlotConfig,
) -> Result<&'r Constructor, PipelineError> {
    if slot.role() != role {
        return Err(PipelineError::RoleMismatch {
            expected: role,
            requested: slot.role(),
            name: slot.name().to_owned(),
        });
    }
    let constructor = registry
        .resolve(role, slot.name())
        .ok_or_else(|| PipelineError::NotFound {
            role,
            name: slot.name().to_owned(),
        })?;
    debug!(
        target: FACTORY_TARGET,
        role = %role,
        name = slot.name(),
        "creating plugin"
    );
    Ok(constructor)
}

/// Creates the registry variant-mismatch error for a constructor filed under
/// the wrong role. Unreachable through the public registry API.
fn variant_mismatch(role: Role, constructor: &Constructor, slot: &SlotConfig) -> PipelineError {
    PipelineError::RoleMismatch {
        expected: role,
        requested: constructor.role(),
        name: slot.name().to_owned(),
    }
}

macro_rules! role_factory {
    ($(#[$doc:meta])* $name:ident, $role:expr, $variant:ident, $product:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'r> {
            registry: &'r ComponentRegistry,
        }

        impl<'r> $name<'r> {
            /// Creates a factory reading from `registry`.
            #[must_use]
            pub const fn new(registry: &'r ComponentRegistry) -> Self {
                Self { registry }
            }
        }

        impl PluginFactory for $name<'_> {
            type Product = dyn $product;

            fn role(&self) -> Role {
                $role
            }

            fn create(&self, slot: &SlotConfig) -> Result<Box<dyn $product>, PipelineError> {
                match lookup(self.registry, $role, slot)? {
                    Constructor::$variant(constructor) => Ok(constructor()),
                    other => Err(variant_mismatch($role, other, slot)),
                }
            }
        }
    };
}

role_factory!(
    /// Factory for [`Input`] plugins.
    InputFactory,
    Role::Input,
    Input,
    Input
);

role_factory!(
    /// Factory for [`Filter`] plugins.
    FilterFactory,
    Role::Filter,
    Filter,
    Filter
);

role_factory!(
    /// Factory for [`Output`] plugins.
    OutputFactory,
    Role::Output,
    Output,
    Output
);

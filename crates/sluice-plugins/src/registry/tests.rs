//! Unit tests for the component registry.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::builtin::{
    self, ConsoleOutput, HelloInput, PassthroughFilter, Transcript, UpperFilter,
};
use crate::lifecycle::Plugin;
use crate::metrics::Metrics;

#[fixture]
fn populated_registry() -> ComponentRegistry {
    builtin::registry(Transcript::new(), Arc::new(Metrics::new()))
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_registry_is_empty() {
    let r = ComponentRegistry::new();
    assert!(r.is_empty());
    assert_eq!(r.len(), 0);
    assert!(r.names(Role::Input).is_empty());
}

#[test]
fn from_registrations_applies_every_triple() {
    let r = ComponentRegistry::from_registrations([
        Registration::new("hello", Constructor::input(|| Box::new(HelloInput::default()))),
        Registration::new("upper", Constructor::filter(|| Box::new(UpperFilter::default()))),
    ]);
    assert_eq!(r.len(), 2);
    assert!(r.contains(Role::Input, "hello"));
    assert!(r.contains(Role::Filter, "upper"));
}

#[test]
fn registration_reports_role_and_name() {
    let registration =
        Registration::new("upper", Constructor::filter(|| Box::new(UpperFilter::default())));
    assert_eq!(registration.name(), "upper");
    assert_eq!(registration.role(), Role::Filter);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[test]
fn register_and_resolve() {
    let mut r = ComponentRegistry::new();
    let replaced = r.register_input("hello", || Box::new(HelloInput::default()));
    assert!(!replaced);
    let constructor = r.resolve(Role::Input, "hello").expect("resolve hello");
    assert_eq!(constructor.role(), Role::Input);
}

#[test]
fn register_replaces_existing_pair() {
    let mut r = ComponentRegistry::new();
    r.register_filter("shape", || Box::new(UpperFilter::default()));
    let replaced = r.register_filter("shape", || Box::new(PassthroughFilter::default()));
    assert!(replaced, "second registration should replace the first");
    assert_eq!(r.len(), 1);

    let Some(Constructor::Filter(constructor)) = r.resolve(Role::Filter, "shape") else {
        panic!("expected a filter constructor");
    };
    assert_eq!(constructor().process("keep"), "keep", "last write wins");
}

#[test]
fn same_name_may_serve_different_roles() {
    let mut r = ComponentRegistry::new();
    r.register_input("echo", || Box::new(HelloInput::default()));
    r.register_filter("echo", || Box::new(PassthroughFilter::default()));
    assert_eq!(r.len(), 2);
    assert!(r.contains(Role::Input, "echo"));
    assert!(r.contains(Role::Filter, "echo"));
    assert!(!r.contains(Role::Output, "echo"));
}

#[test]
fn roles_are_indexed_independently() {
    let mut r = ComponentRegistry::new();
    r.register_output("sink", || Box::new(ConsoleOutput::default()));
    assert!(!r.is_empty());
    assert_eq!(r.len(), 1);
    assert!(r.resolve(Role::Input, "sink").is_none());
    assert!(r.resolve(Role::Output, "sink").is_some());
    assert!(r.names(Role::Filter).is_empty());
    assert_eq!(r.names(Role::Output), ["sink"]);
}

#[test]
fn constructors_build_fresh_instances() {
    let mut r = ComponentRegistry::new();
    r.register_input("hello", || Box::new(HelloInput::default()));
    let Some(Constructor::Input(constructor)) = r.resolve(Role::Input, "hello") else {
        panic!("expected an input constructor");
    };
    let mut first = constructor();
    first.start();
    let second = constructor();
    assert!(first.status().is_started());
    assert!(!second.status().is_started());
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[rstest]
fn resolve_returns_none_for_missing(populated_registry: ComponentRegistry) {
    assert!(populated_registry.resolve(Role::Input, "nonexistent").is_none());
    assert!(populated_registry.resolve(Role::Output, "hello").is_none());
}

#[rstest]
#[case::inputs(Role::Input, &["consumer", "hello", "metered-hello"])]
#[case::filters(Role::Filter, &["passthrough", "upper"])]
#[case::outputs(Role::Output, &["console"])]
fn names_are_sorted_per_role(
    populated_registry: ComponentRegistry,
    #[case] role: Role,
    #[case] expected: &[&str],
) {
    assert_eq!(populated_registry.names(role), expected);
}

#[rstest]
fn len_reflects_registration_count(populated_registry: ComponentRegistry) {
    assert_eq!(populated_registry.len(), 6);
    assert!(!populated_registry.is_empty());
}

#[rstest]
fn debug_lists_names_by_role(populated_registry: ComponentRegistry) {
    let debug = format!("{populated_registry:?}");
    assert!(debug.contains("upper"), "got: {debug}");
    assert!(debug.contains("console"), "got: {debug}");
}

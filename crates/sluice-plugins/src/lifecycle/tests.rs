//! Unit tests for lifecycle types.

use rstest::rstest;

use super::*;

#[derive(Default)]
struct Toggle {
    status: Status,
}

impl Plugin for Toggle {
    fn start(&mut self) {
        self.status = Status::Started;
    }

    fn stop(&mut self) {
        self.status = Status::Stopped;
    }

    fn status(&self) -> Status {
        self.status
    }
}

#[test]
fn status_defaults_to_stopped() {
    assert_eq!(Status::default(), Status::Stopped);
    assert!(!Status::default().is_started());
}

#[rstest]
#[case::stopped(Status::Stopped, "stopped")]
#[case::started(Status::Started, "started")]
fn status_display_matches_as_str(#[case] status: Status, #[case] expected: &str) {
    assert_eq!(status.as_str(), expected);
    assert_eq!(status.to_string(), expected);
}

#[rstest]
#[case::input(Role::Input, "input")]
#[case::filter(Role::Filter, "filter")]
#[case::output(Role::Output, "output")]
fn role_serialises_as_snake_case(#[case] role: Role, #[case] expected: &str) {
    let json = serde_json::to_string(&role).expect("serialise role");
    assert_eq!(json, format!("\"{expected}\""));
    assert_eq!(role.to_string(), expected);
}

#[test]
fn roles_are_listed_in_data_flow_order() {
    assert_eq!(Role::ALL, [Role::Input, Role::Filter, Role::Output]);
}

#[test]
fn boxed_plugin_forwards_lifecycle() {
    let mut boxed: Box<dyn Plugin> = Box::new(Toggle::default());
    boxed.start();
    assert_eq!(boxed.status(), Status::Started);
    boxed.start();
    assert_eq!(boxed.status(), Status::Started, "redundant start is harmless");
    boxed.stop();
    assert_eq!(boxed.status(), Status::Stopped);
}

//! Unit tests for the consumer adapter.

use mockall::mock;
use rstest::{fixture, rstest};

use super::*;

mock! {
    PolledConsumer {}
    impl Consumer for PolledConsumer {
        fn poll(&mut self) -> Records;
    }
}

#[fixture]
fn single_item_consumer() -> MockPolledConsumer {
    let mut consumer = MockPolledConsumer::new();
    consumer
        .expect_poll()
        .returning(|| Records::new(["i am mock consumer."]));
    consumer
}

#[rstest]
fn receive_returns_single_item_without_delimiter(single_item_consumer: MockPolledConsumer) {
    let mut input = ConsumerInput::new(single_item_consumer);
    input.start();
    assert_eq!(input.receive(), "i am mock consumer.");
}

#[test]
fn receive_before_start_is_empty_and_does_not_poll() {
    let mut consumer = MockPolledConsumer::new();
    consumer.expect_poll().never();
    let mut input = ConsumerInput::new(consumer);
    assert_eq!(input.status(), Status::Stopped);
    assert_eq!(input.receive(), "");
}

#[test]
fn receive_after_stop_is_empty() {
    let mut consumer = MockPolledConsumer::new();
    consumer
        .expect_poll()
        .once()
        .returning(|| Records::new(["x"]));
    let mut input = ConsumerInput::new(consumer);
    input.start();
    assert_eq!(input.receive(), "x");
    input.stop();
    assert_eq!(input.receive(), "");
}

#[rstest]
#[case::empty(Vec::new(), "")]
#[case::one(vec!["a"], "a")]
#[case::many(vec!["a", "b", "c"], "a,b,c")]
fn batches_are_joined_with_delimiter(#[case] items: Vec<&'static str>, #[case] expected: &str) {
    let mut input = ConsumerInput::new(FixedConsumer::new(items));
    input.start();
    assert_eq!(input.receive(), expected);
}

#[test]
fn each_receive_polls_once() {
    let mut consumer = MockPolledConsumer::new();
    consumer
        .expect_poll()
        .times(3)
        .returning(|| Records::new(["tick"]));
    let mut input = ConsumerInput::new(consumer);
    input.start();
    for _ in 0..3 {
        assert_eq!(input.receive(), "tick");
    }
}

#[test]
fn lifecycle_flips_only_adapter_status() {
    let mut input = ConsumerInput::new(FixedConsumer::new(["a"]));
    input.start();
    input.start();
    assert_eq!(input.status(), Status::Started);
    input.stop();
    assert_eq!(input.status(), Status::Stopped);
    assert_eq!(input.consumer().records.items(), ["a"]);
}

#[test]
fn records_report_emptiness() {
    assert!(Records::default().is_empty());
    assert!(!Records::new(["a"]).is_empty());
}

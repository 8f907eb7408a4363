//! Crate-level integration and BDD tests, plus shared test doubles.

use std::sync::{Arc, Mutex};

use crate::builtin::{self, Transcript};
use crate::lifecycle::{Filter, Input, Output, Plugin, Role, Status};
use crate::metrics::Metrics;
use crate::pipeline::{Pipeline, PipelineConfig, SlotConfig};
use crate::registry::ComponentRegistry;


/// Ordered record of lifecycle and data calls across several stages.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventLog {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub(crate) fn push(&self, event: String) {
        self.events.lock().expect("event log poisoned").push(event);
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

/// Stage that logs every call and can play any role.
pub(crate) struct RecordingStage {
    role: Role,
    status: Status,
    log: EventLog,
}

impl RecordingStage {
    pub(crate) fn new(role: Role, log: EventLog) -> Self {
        Self {
            role,
            status: Status::Stopped,
            log,
        }
    }
}

impl Plugin for RecordingStage {
    fn start(&mut self) {
        self.status = Status::Started;
        self.log.push(format!("start:{}", self.role));
    }

    fn stop(&mut self) {
        self.status = Status::Stopped;
        self.log.push(format!("stop:{}", self.role));
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl Input for RecordingStage {
    fn receive(&mut self) -> String {
        self.log.push(String::from("receive"));
        String::from("payload")
    }
}

impl Filter for RecordingStage {
    fn process(&self, message: &str) -> String {
        self.log.push(format!("process:{message}"));
        format!("<{message}>")
    }
}

impl Output for RecordingStage {
    fn send(&mut self, message: &str) {
        self.log.push(format!("send:{message}"));
    }
}

/// Registry whose `recording` entries all write to `log`.
pub(crate) fn recording_registry(log: &EventLog) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    let input_log = log.clone();
    registry.register_input("recording", move || {
        Box::new(RecordingStage::new(Role::Input, input_log.clone()))
    });
    let filter_log = log.clone();
    registry.register_filter("recording", move || {
        Box::new(RecordingStage::new(Role::Filter, filter_log.clone()))
    });
    let output_log = log.clone();
    registry.register_output("recording", move || {
        Box::new(RecordingStage::new(Role::Output, output_log.clone()))
    });
    registry
}

/// Config selecting the `recording` stage in every slot.
pub(crate) fn recording_config() -> PipelineConfig {
    PipelineConfig::new(
        SlotConfig::input("recording"),
        SlotConfig::filter("recording"),
        SlotConfig::output("recording"),
    )
}

#[test]
fn end_to_end_hello_upper_console() {
    let transcript = Transcript::new();
    let registry = builtin::registry(transcript.clone(), Arc::new(Metrics::new()));
    let config = PipelineConfig::new(
        SlotConfig::input("hello"),
        SlotConfig::filter("upper"),
        SlotConfig::output("console"),
    );

    let mut pipeline = Pipeline::build(&registry, &config).expect("build");
    pipeline.start();
    pipeline.exec();
    pipeline.stop();

    assert_eq!(transcript.messages(), vec![String::from("HELLO WORLD")]);
    assert!(pipeline.child_statuses().all(Status::Stopped));
}

#[test]
fn end_to_end_consumer_passthrough_console() {
    let transcript = Transcript::new();
    let registry = builtin::registry(transcript.clone(), Arc::new(Metrics::new()));
    let config = PipelineConfig::new(
        SlotConfig::input("consumer"),
        SlotConfig::filter("passthrough"),
        SlotConfig::output("console"),
    );

    let mut pipeline = Pipeline::build(&registry, &config).expect("build");
    pipeline.start();
    pipeline.exec();
    pipeline.stop();

    assert_eq!(transcript.last().as_deref(), Some(builtin::CONSUMER_MESSAGE));
}

#[test]
fn end_to_end_metered_hello_counts_each_exec() {
    let metrics = Arc::new(Metrics::new());
    let registry = builtin::registry(Transcript::new(), Arc::clone(&metrics));
    let config = PipelineConfig::new(
        SlotConfig::input("metered-hello"),
        SlotConfig::filter("upper"),
        SlotConfig::output("console"),
    );

    let mut pipeline = Pipeline::build(&registry, &config).expect("build");
    pipeline.start();
    for _ in 0..3 {
        pipeline.exec();
    }
    pipeline.stop();

    assert_eq!(metrics.count(builtin::METERED_HELLO_KEY), 3);
}

//! RecordingSink — collects every report for inspection in tests.

use crate::sink::FailureSink;
use std::sync::Mutex;

/// A recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A fatal report; the batch stopped after this.
    Fatal(String),
    /// A non-fatal report; the batch kept going.
    NonFatal(String),
    /// An informational log line.
    Log(String),
}

/// A sink that records every call and never panics or aborts anything.
/// Use `.events()` to inspect what was reported.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all recorded events.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Messages of fatal and non-fatal reports, in order.
    pub fn failure_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Fatal(message) | SinkEvent::NonFatal(message) => Some(message),
                SinkEvent::Log(_) => None,
            })
            .collect()
    }
}

impl FailureSink for RecordingSink {
    fn non_fatal(&self, message: &str) {
        self.events.lock().unwrap().push(SinkEvent::NonFatal(message.to_owned()));
    }

    fn fatal(&self, message: &str) {
        self.events.lock().unwrap().push(SinkEvent::Fatal(message.to_owned()));
    }

    fn log(&self, message: &str) {
        self.events.lock().unwrap().push(SinkEvent::Log(message.to_owned()));
    }

    fn failed(&self) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|event| matches!(event, SinkEvent::Fatal(_) | SinkEvent::NonFatal(_)))
    }
}

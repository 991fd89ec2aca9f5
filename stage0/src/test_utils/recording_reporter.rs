//! RecordingReporter — collects lifecycle events for inspection in tests.

use crate::report::{Reporter, StepResult, TestResult};
use std::sync::Mutex;

/// A recorded reporter event.
#[derive(Debug, Clone)]
pub enum ReportEvent {
    /// `on_test_start` fired.
    TestStarted(String),
    /// `on_test_finish` fired.
    TestFinished(TestResult),
    /// `on_step_start` fired.
    StepStarted(String),
    /// `on_step_finish` fired.
    StepFinished(StepResult),
}

/// A reporter that records every event. Use `.events()` to inspect the
/// stream.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    /// Create an empty recording reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all recorded events.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Descriptions of started steps, in order.
    pub fn started_steps(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::StepStarted(description) => Some(description),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn on_test_start(&self, test_name: &str) {
        self.events.lock().unwrap().push(ReportEvent::TestStarted(test_name.to_owned()));
    }

    fn on_test_finish(&self, result: &TestResult) {
        self.events.lock().unwrap().push(ReportEvent::TestFinished(result.clone()));
    }

    fn on_step_start(&self, description: &str) {
        self.events.lock().unwrap().push(ReportEvent::StepStarted(description.to_owned()));
    }

    fn on_step_finish(&self, result: &StepResult) {
        self.events.lock().unwrap().push(ReportEvent::StepFinished(result.clone()));
    }
}

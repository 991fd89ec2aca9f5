//! Machine-readable reporting: one JSON object per event.

use serde::Serialize;
use stage0::{Reporter, StepResult, TestResult};
use std::io::Write;
use std::sync::Mutex;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReportLine<'a> {
    TestStarted {
        name: &'a str,
    },
    TestFinished {
        #[serde(flatten)]
        result: &'a TestResult,
    },
    StepStarted {
        description: &'a str,
    },
    StepFinished {
        #[serde(flatten)]
        result: &'a StepResult,
    },
}

/// Emits every report event as one line of JSON.
///
/// The line carries an `event` tag plus the flattened payload, e.g.
///
/// ```text
/// {"event":"step_finished","description":"Ana ensures that 2 (i32) equals 2","status":"passed","duration":0,"error":null}
/// ```
///
/// Suitable for piping into log collectors or diffing in CI. Write and
/// serialization failures are ignored — reporting must never take a
/// test down with it.
pub struct JsonLinesReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonLinesReporter {
    /// Report to stdout.
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Report to the given writer.
    pub fn with_output(out: impl Write + Send + 'static) -> Self {
        Self { out: Mutex::new(Box::new(out)) }
    }

    fn emit(&self, line: &ReportLine<'_>) {
        if let Ok(payload) = serde_json::to_string(line) {
            let mut out = self.out.lock().unwrap();
            let _ = writeln!(out, "{payload}");
        }
    }
}

impl Default for JsonLinesReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonLinesReporter {
    fn on_test_start(&self, test_name: &str) {
        self.emit(&ReportLine::TestStarted { name: test_name });
    }

    fn on_test_finish(&self, result: &TestResult) {
        self.emit(&ReportLine::TestFinished { result });
    }

    fn on_step_start(&self, description: &str) {
        self.emit(&ReportLine::StepStarted { description });
    }

    fn on_step_finish(&self, result: &StepResult) {
        self.emit(&ReportLine::StepFinished { result });
    }
}

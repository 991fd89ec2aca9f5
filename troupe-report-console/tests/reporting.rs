//! Reporter output: console rendering and JSON-lines structure.

use serde_json::Value;
use stage0::test_utils::RecordingSink;
use stage0::{Actor, ActivityError, FailureMode, Interaction, Reporter};
use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use troupe_report_console::{ConsoleReporter, JsonLinesReporter};

/// A writer that can be read back after the reporter is done with it.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_one_passing_and_one_failing_step(reporter: Arc<dyn Reporter>) {
    let actor = Actor::named("Ana")
        .with_sink(Arc::new(RecordingSink::new()))
        .with_reporter(reporter);

    let ok = Interaction::new("#actor waters the plants", |_: &Actor| Ok(()));
    let bad = Interaction::new("#actor boils the ocean", |_: &Actor| {
        Err(ActivityError::other("too much ocean"))
    })
    .with_failure_mode(FailureMode::ErrorButContinue);
    actor.attempts_to(&[&ok, &bad]);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ConsoleReporter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn console_renders_steps_with_markers_and_errors() {
    let buffer = SharedBuffer::default();
    let reporter = Arc::new(ConsoleReporter::with_output(buffer.clone()));
    run_one_passing_and_one_failing_step(reporter);

    let output = buffer.contents();
    assert!(output.contains("✔ Ana waters the plants"));
    assert!(output.contains("✘ Ana boils the ocean"));
    assert!(output.contains("Error: too much ocean"));
}

#[test]
fn console_brackets_the_test_run() {
    let buffer = SharedBuffer::default();
    let reporter = ConsoleReporter::with_output(buffer.clone());

    reporter.on_test_start("watering_cycle");
    reporter.on_test_finish(&stage0::TestResult {
        name: "watering_cycle".to_owned(),
        status: stage0::Status::Passed,
        duration: stage0::DurationMs::from_millis(1250),
        error: None,
    });

    let output = buffer.contents();
    assert!(output.contains("▶ watering_cycle"));
    assert!(output.contains("watering_cycle: PASSED (1.25s)"));
}

#[test]
fn console_indents_nested_steps() {
    let buffer = SharedBuffer::default();
    let reporter = ConsoleReporter::with_output(buffer.clone());

    reporter.on_step_start("outer task");
    reporter.on_step_start("inner step");
    reporter.on_step_finish(&stage0::StepResult {
        description: "inner step".to_owned(),
        status: stage0::Status::Passed,
        duration: stage0::DurationMs::ZERO,
        error: None,
    });
    reporter.on_step_finish(&stage0::StepResult {
        description: "outer task".to_owned(),
        status: stage0::Status::Passed,
        duration: stage0::DurationMs::ZERO,
        error: None,
    });

    let output = buffer.contents();
    assert!(output.contains("    ✔ inner step"));
    assert!(output.contains("\n  ✔ outer task"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// JsonLinesReporter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn json_lines_are_individually_parseable_and_tagged() {
    let buffer = SharedBuffer::default();
    let reporter = Arc::new(JsonLinesReporter::with_output(buffer.clone()));
    run_one_passing_and_one_failing_step(reporter);

    let output = buffer.contents();
    let lines: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0]["event"], "step_started");
    assert_eq!(lines[0]["description"], "Ana waters the plants");
    assert_eq!(lines[1]["event"], "step_finished");
    assert_eq!(lines[1]["status"], "passed");
    assert_eq!(lines[3]["status"], "failed");
    assert_eq!(lines[3]["error"], "too much ocean");
}

#[test]
fn json_test_events_flatten_the_result_payload() {
    let buffer = SharedBuffer::default();
    let reporter = JsonLinesReporter::with_output(buffer.clone());

    reporter.on_test_start("api_checks");
    reporter.on_test_finish(&stage0::TestResult {
        name: "api_checks".to_owned(),
        status: stage0::Status::Failed,
        duration: stage0::DurationMs::from_millis(40),
        error: Some("test failed".to_owned()),
    });

    let lines: Vec<Value> = buffer
        .contents()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines[0]["event"], "test_started");
    assert_eq!(lines[1]["event"], "test_finished");
    assert_eq!(lines[1]["name"], "api_checks");
    assert_eq!(lines[1]["duration"], 40);
}

#[test]
fn json_reporter_writes_to_a_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let reporter = JsonLinesReporter::with_output(file.reopen().unwrap());

    reporter.on_step_start("writes a report");

    let mut written = String::new();
    file.reopen().unwrap().read_to_string(&mut written).unwrap();
    let line: Value = serde_json::from_str(written.trim()).unwrap();
    assert_eq!(line["event"], "step_started");
    assert_eq!(line["description"], "writes a report");
}

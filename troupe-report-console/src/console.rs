//! Human-readable console reporting.

use stage0::{Reporter, Status, StepResult, TestResult};
use std::io::Write;
use std::sync::Mutex;

struct ConsoleState {
    out: Box<dyn Write + Send>,
    indent: usize,
}

/// Renders step and test events as indented console lines.
///
/// ```text
/// ▶ checkout_happy_path
///   ✔ Ana adds a teapot to the cart (0.02s)
///   ✘ Ana ensures that the cart total equals 42 (0.00s)
///     Error: assertion failed for 'the cart total': expected 42, but got 41
/// ✘ checkout_happy_path: FAILED (0.03s)
/// ```
///
/// Nested steps (tasks reporting their sub-steps) indent one level per
/// active step. Write failures are ignored — reporting must never take
/// a test down with it.
pub struct ConsoleReporter {
    state: Mutex<ConsoleState>,
}

impl ConsoleReporter {
    /// Report to stdout.
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Report to the given writer.
    pub fn with_output(out: impl Write + Send + 'static) -> Self {
        Self {
            state: Mutex::new(ConsoleState { out: Box::new(out), indent: 0 }),
        }
    }

    fn marker(status: Status) -> &'static str {
        match status {
            Status::Passed => "✔",
            Status::Failed => "✘",
            Status::Skipped => "–",
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn on_test_start(&self, test_name: &str) {
        let mut state = self.state.lock().unwrap();
        state.indent = 0;
        let _ = writeln!(state.out, "▶ {test_name}");
    }

    fn on_test_finish(&self, result: &TestResult) {
        let mut state = self.state.lock().unwrap();
        let verdict = match result.status {
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
            Status::Skipped => "SKIPPED",
        };
        let _ = writeln!(
            state.out,
            "{} {}: {verdict} ({:.2}s)",
            Self::marker(result.status),
            result.name,
            result.duration.as_secs_f64()
        );
        if let Some(error) = &result.error {
            let _ = writeln!(state.out, "  Error: {error}");
        }
    }

    fn on_step_start(&self, _description: &str) {
        let mut state = self.state.lock().unwrap();
        state.indent += 1;
    }

    fn on_step_finish(&self, result: &StepResult) {
        let mut state = self.state.lock().unwrap();
        let indent = "  ".repeat(state.indent);
        let _ = writeln!(
            state.out,
            "{indent}{} {} ({:.2}s)",
            Self::marker(result.status),
            result.description,
            result.duration.as_secs_f64()
        );
        if let Some(error) = &result.error {
            let _ = writeln!(state.out, "{indent}  Error: {error}");
        }
        state.indent = state.indent.saturating_sub(1);
    }
}

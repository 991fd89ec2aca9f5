//! Reporting contract — step and test lifecycle events.
//!
//! Reporting is observation only: a [`Reporter`] renders what happened,
//! while pass/fail verdicts flow through the [`FailureSink`]. The two
//! are deliberately separate collaborators, wired to the actor
//! independently.
//!
//! [`FailureSink`]: crate::FailureSink

use crate::duration::DurationMs;
use serde::{Deserialize, Serialize};

/// Placeholder token activities may use at the start of a description.
/// The engine replaces it with the performing actor's name before any
/// reporter event is emitted, so "#actor ensures that ..." renders as
/// "Ana ensures that ...".
pub const ACTOR_PLACEHOLDER: &str = "#actor";

/// Resolve the [`ACTOR_PLACEHOLDER`] prefix of a description to the
/// given actor name. Descriptions without the prefix pass through
/// unchanged.
pub fn resolve_description(description: &str, actor_name: &str) -> String {
    match description.strip_prefix(ACTOR_PLACEHOLDER) {
        Some(rest) => format!("{actor_name}{rest}"),
        None => description.to_owned(),
    }
}

/// Outcome of a step or a whole test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Completed without failure.
    Passed,
    /// Completed with a failure.
    Failed,
    /// Never executed.
    Skipped,
}

/// Outcome of a single activity, delivered to
/// [`Reporter::on_step_finish`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Resolved step description (no placeholder).
    pub description: String,
    /// Whether the step passed.
    pub status: Status,
    /// Wall-clock duration of the step.
    pub duration: DurationMs,
    /// Failure text when the step failed.
    pub error: Option<String>,
}

/// Outcome of a whole test, delivered to [`Reporter::on_test_finish`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// The test's name.
    pub name: String,
    /// Final verdict.
    pub status: Status,
    /// Wall-clock duration of the test.
    pub duration: DurationMs,
    /// Failure text when the test failed.
    pub error: Option<String>,
}

/// Receives step and test lifecycle events.
///
/// The engine calls `on_step_start`/`on_step_finish` around every
/// activity it dispatches; a session construct brackets the run with
/// `on_test_start`/`on_test_finish`. Implementations must tolerate
/// concurrent steps from actors shared across threads.
pub trait Reporter: Send + Sync {
    /// A test began.
    fn on_test_start(&self, test_name: &str);

    /// A test completed.
    fn on_test_finish(&self, result: &TestResult);

    /// An activity is about to run.
    fn on_step_start(&self, description: &str);

    /// An activity completed.
    fn on_step_finish(&self, result: &StepResult);
}

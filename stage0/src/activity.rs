//! The Activity contract — one executable step with a failure policy.

use crate::actor::Actor;
use crate::error::ActivityError;
use serde::{Deserialize, Serialize};

/// How a failing activity affects the remainder of its batch.
///
/// The mode is fixed at construction and consulted by the sequencing
/// loop in [`Actor::attempts_to`] — activities never inspect it
/// themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Report the failure as fatal and stop the current batch.
    #[default]
    FailFast,
    /// Report the failure, mark the run failed, keep going. Useful for
    /// collecting several assertion failures in one report.
    ErrorButContinue,
    /// Swallow the failure entirely; at most a diagnostic log line.
    Ignore,
}

/// An action an actor can perform: the unit of execution.
///
/// Activities are one-shot value objects — construct, perform, discard.
/// Each `perform_as` call must be independently safe; the engine makes
/// no attempt to serialize calls across batches.
pub trait Activity: Send + Sync {
    /// Human-readable description, used in reports and failure messages.
    /// May begin with the [`ACTOR_PLACEHOLDER`] token, which the engine
    /// resolves to the performing actor's name.
    ///
    /// [`ACTOR_PLACEHOLDER`]: crate::report::ACTOR_PLACEHOLDER
    fn description(&self) -> String;

    /// Execute the step as the given actor.
    fn perform_as(&self, actor: &Actor) -> Result<(), ActivityError>;

    /// The step's failure policy. Fixed per activity; defaults to
    /// [`FailureMode::FailFast`].
    fn failure_mode(&self) -> FailureMode {
        FailureMode::FailFast
    }
}

/// A low-level, atomic activity built from a closure.
///
/// ```
/// use stage0::{Actor, FailureMode, Interaction};
///
/// let cleanup = Interaction::new("removes the scratch directory", |_actor: &Actor| Ok(()))
///     .with_failure_mode(FailureMode::Ignore);
/// ```
pub struct Interaction {
    description: String,
    failure_mode: FailureMode,
    run: Box<dyn Fn(&Actor) -> Result<(), ActivityError> + Send + Sync>,
}

impl Interaction {
    /// Create an interaction from a description and a perform function.
    pub fn new<F>(description: impl Into<String>, run: F) -> Self
    where
        F: Fn(&Actor) -> Result<(), ActivityError> + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            failure_mode: FailureMode::FailFast,
            run: Box::new(run),
        }
    }

    /// Override the failure policy (defaults to fail-fast).
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }
}

impl Activity for Interaction {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn perform_as(&self, actor: &Actor) -> Result<(), ActivityError> {
        (self.run)(actor)
    }

    fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }
}

/// A high-level activity composed of ordered sub-activities.
///
/// Tasks run their steps with fail-fast semantics internally: the first
/// failing step aborts the rest, and the task surfaces as failed with an
/// error naming both the task and the step.
///
/// ```
/// use stage0::{Actor, Interaction, Task};
///
/// let register = Task::named("registers a new account")
///     .with(Interaction::new("submits the signup form", |_: &Actor| Ok(())))
///     .with(Interaction::new("confirms the email", |_: &Actor| Ok(())));
/// ```
pub struct Task {
    description: String,
    steps: Vec<Box<dyn Activity>>,
}

impl Task {
    /// Create an empty task with the given description.
    pub fn named(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            steps: Vec::new(),
        }
    }

    /// Append a sub-activity.
    pub fn with(mut self, step: impl Activity + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }
}

impl Activity for Task {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn perform_as(&self, actor: &Actor) -> Result<(), ActivityError> {
        for step in &self.steps {
            step.perform_as(actor).map_err(|source| ActivityError::Task {
                task: self.description.clone(),
                step: step.description(),
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

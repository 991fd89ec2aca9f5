//! Error types for each contract.
//!
//! All of these are descriptive, message-carrying values rather than a
//! structured code hierarchy. Callers branch on "did it fail", not on
//! which variant — the variant exists so the message composes the right
//! context.

use thiserror::Error;

/// An activity or question asked for a capability the actor does not hold.
///
/// This is a normal, expected failure path — never a panic. Callers
/// propagate it upward, where it becomes the step's error in the
/// sequencing loop.
#[derive(Debug, Clone, Error)]
#[error("actor '{actor}' does not have the '{ability}' ability")]
pub struct MissingAbility {
    /// Name of the actor that was asked.
    pub actor: String,
    /// Type name of the ability that was requested.
    pub ability: &'static str,
}

/// Errors produced while answering a question.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QuestionError {
    /// The actor lacks an ability the question needs.
    #[error(transparent)]
    MissingAbility(#[from] MissingAbility),

    /// The question's own logic failed to produce a value.
    #[error("{0}")]
    Failed(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Why an expectation rejected a value.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExpectationError {
    /// The value did not match; both sides are carried in the message.
    #[error("expected {expected}, but got {actual}")]
    Mismatch {
        /// What the expectation wanted.
        expected: String,
        /// What the question actually answered.
        actual: String,
    },

    /// The value failed the predicate.
    #[error("{0}")]
    Unsatisfied(String),

    /// The expectation cannot apply to this value's type or shape.
    /// Misuse fails the specific assertion step — it never panics.
    #[error("{0}")]
    Usage(String),
}

/// Errors produced by performing an activity.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ActivityError {
    /// The actor lacks an ability the activity needs.
    #[error(transparent)]
    MissingAbility(#[from] MissingAbility),

    /// A question could not be answered. Distinct from an assertion
    /// failure: the value was never retrieved.
    #[error("failed to answer question '{question}': {source}")]
    Question {
        /// Description of the question that failed.
        question: String,
        /// The underlying question error.
        source: QuestionError,
    },

    /// The value was retrieved but failed its expectation.
    #[error("assertion failed for '{question}': {source}")]
    Assertion {
        /// Description of the question whose answer was checked.
        question: String,
        /// The underlying expectation error.
        source: ExpectationError,
    },

    /// A sub-activity of a task failed, aborting the task.
    #[error("task '{task}' failed during step '{step}': {source}")]
    Task {
        /// Description of the enclosing task.
        task: String,
        /// Description of the step that failed.
        step: String,
        /// The step's own error.
        source: Box<ActivityError>,
    },

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ActivityError {
    /// Build an [`ActivityError::Other`] from a plain message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into())
    }
}

impl QuestionError {
    /// Build a [`QuestionError::Failed`] from a plain message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

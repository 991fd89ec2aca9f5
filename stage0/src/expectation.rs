//! The Expectation contract — typed predicates over question answers.

use crate::error::ExpectationError;

/// A typed predicate evaluated against a question's answer.
///
/// `Ok(())` is the only success signal. Any error is a failure to
/// surface, and the error's text is the diagnostic shown to the user —
/// there is no separate structured failure payload. Evaluation must be
/// a pure function of the input value; expectations never see the actor.
///
/// The trait is generic over the value type rather than using an
/// associated type so that one expectation can apply to several answer
/// types — a length check works on strings and vectors alike.
pub trait Expectation<T>: Send + Sync {
    /// Evaluate the predicate against the actual value.
    fn evaluate(&self, actual: &T) -> Result<(), ExpectationError>;

    /// Human-readable description, composed into assertion-step
    /// descriptions ("... ensures that <question> <expectation>").
    fn description(&self) -> String;
}

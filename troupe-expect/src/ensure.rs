//! The Ensure activity — binds one question to one expectation.

use stage0::report::ACTOR_PLACEHOLDER;
use stage0::{Activity, ActivityError, Actor, Expectation, FailureMode, Question};

/// An assertion step: ask a question, evaluate an expectation against
/// the answer.
///
/// The expectation must accept the question's answer type — pairing a
/// numeric question with a string expectation does not compile. Build
/// instances with [`that`].
///
/// The default failure mode is [`FailureMode::ErrorButContinue`]: one
/// failed assertion marks the run failed but does not hide the
/// assertions after it. Override with [`Ensure::with_failure_mode`]
/// when an assertion is a precondition the rest of the batch cannot
/// survive without.
pub struct Ensure<Q, E> {
    question: Q,
    expectation: E,
    failure_mode: FailureMode,
}

/// Bind `question` and `expectation` into an assertion activity.
///
/// ```
/// use stage0::Actor;
/// use troupe_expect::{ensure, equals, value_of};
///
/// let ana = Actor::named("Ana");
/// ana.attempts_to(&[&ensure::that(value_of(2 + 2), equals(4))]);
/// ```
pub fn that<Q, E>(question: Q, expectation: E) -> Ensure<Q, E>
where
    Q: Question,
    E: Expectation<Q::Answer>,
{
    Ensure {
        question,
        expectation,
        failure_mode: FailureMode::ErrorButContinue,
    }
}

impl<Q, E> Ensure<Q, E> {
    /// Override the failure policy for this assertion.
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }
}

impl<Q, E> Activity for Ensure<Q, E>
where
    Q: Question,
    E: Expectation<Q::Answer>,
{
    fn description(&self) -> String {
        format!(
            "{ACTOR_PLACEHOLDER} ensures that {} {}",
            self.question.description(),
            self.expectation.description()
        )
    }

    fn perform_as(&self, actor: &Actor) -> Result<(), ActivityError> {
        // A question failure is a retrieval failure, distinct from the
        // assertion failing on a retrieved value.
        let actual = self.question.answered_by(actor).map_err(|source| ActivityError::Question {
            question: self.question.description(),
            source,
        })?;

        self.expectation.evaluate(&actual).map_err(|source| ActivityError::Assertion {
            question: self.question.description(),
            source,
        })
    }

    fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }
}

//! The Question contract — typed queries against actor/system state.

use crate::actor::Actor;
use crate::error::QuestionError;

/// A typed query an actor can answer.
///
/// A question retrieves a value; it asserts nothing. Pairing it with an
/// [`Expectation`] of the same answer type — the type system enforces
/// the match — is what turns it into an assertion step. Keeping the two
/// apart is the point: the same expectation checks different questions,
/// and the same question is checked against different expectations
/// without re-fetching.
///
/// Answering must be a pure function of the actor's observable state at
/// call time. A question may read mutable ability state (a "last
/// response" field), but a single call must not disturb what unrelated
/// questions will answer beyond what the abilities themselves mutate.
/// The engine imposes no caching.
///
/// [`Expectation`]: crate::Expectation
pub trait Question: Send + Sync {
    /// The type of value this question produces.
    type Answer;

    /// Produce the answer when asked by the given actor.
    fn answered_by(&self, actor: &Actor) -> Result<Self::Answer, QuestionError>;

    /// Human-readable description, used in reports and failure messages.
    fn description(&self) -> String;
}

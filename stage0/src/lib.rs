//! # stage0 — Screenplay-pattern contracts and the activity execution engine
//!
//! This crate defines the contracts that make up a screenplay-style test
//! and the engine that runs them: an [`Actor`] performs [`Activity`]
//! steps in order, consulting each step's [`FailureMode`] when it fails.
//!
//! ## The Contracts
//!
//! | Contract | Trait | What it does |
//! |----------|-------|--------------|
//! | Activity | [`Activity`] | One executable step with a failure policy |
//! | Question | [`Question`] | A typed query against actor/system state |
//! | Expectation | [`Expectation`] | A typed predicate over a question's answer |
//! | Ability | [`Ability`] | An opaque capability an actor holds |
//! | Failure sink | [`FailureSink`] | Turns failures into test-run verdicts |
//! | Reporter | [`Reporter`] | Step/test lifecycle events for reporting |
//!
//! ## Design Principle
//!
//! The engine is a synchronous, single-call-stack loop. `attempts_to`
//! runs every activity on the calling thread, in the order given — no
//! scheduler, no queue, no internal spawning. An activity that blocks
//! blocks the batch; that is the contract, not a limitation to paper
//! over. The only shared mutable state the engine owns is the actor's
//! ability list, behind a read-write lock.
//!
//! Errors stay message-carrying values. Every layer wraps the failure
//! below it with one line of context — which question, which pairing,
//! which task step — so the final message reads as a chain, and nothing
//! is swallowed unless a step's failure mode is [`FailureMode::Ignore`].

#![deny(missing_docs)]

pub mod ability;
pub mod activity;
pub mod actor;
pub mod duration;
pub mod error;
pub mod expectation;
pub mod question;
pub mod report;
pub mod sink;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use ability::Ability;
pub use activity::{Activity, FailureMode, Interaction, Task};
pub use actor::Actor;
pub use duration::DurationMs;
pub use error::{ActivityError, ExpectationError, MissingAbility, QuestionError};
pub use expectation::Expectation;
pub use question::Question;
pub use report::{ACTOR_PLACEHOLDER, Reporter, Status, StepResult, TestResult, resolve_description};
pub use sink::{FailureSink, TracingSink};

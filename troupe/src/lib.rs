#![deny(missing_docs)]
//! # troupe — umbrella crate
//!
//! Provides a single import surface for screenplay-pattern test
//! authoring. Re-exports the contracts crate and key implementations
//! behind feature flags, plus a `prelude` for the happy path.

#[cfg(feature = "core")]
pub use stage0;
#[cfg(feature = "expect")]
pub use troupe_expect;
#[cfg(feature = "report-console")]
pub use troupe_report_console;
#[cfg(feature = "session")]
pub use troupe_session;

/// Happy-path imports for writing screenplay tests.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use stage0::{
        Ability, Activity, ActivityError, Actor, DurationMs, Expectation, ExpectationError,
        FailureMode, FailureSink, Interaction, MissingAbility, Question, QuestionError, Reporter,
        Status, StepResult, Task, TestResult, TracingSink,
    };

    #[cfg(feature = "expect")]
    pub use troupe_expect::{
        contains, contains_key, ensure, equals, greater_than, has_length, is_empty, less_than,
        result_of, satisfies, value_of,
    };

    #[cfg(feature = "session")]
    pub use troupe_session::Session;

    #[cfg(feature = "report-console")]
    pub use troupe_report_console::{ConsoleReporter, JsonLinesReporter};
}

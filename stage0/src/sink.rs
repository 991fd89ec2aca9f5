//! The failure sink — where the engine reports step failures.
//!
//! The sink is consulted at exactly the three [`FailureMode`] branch
//! points in the sequencing loop. It is how a failure becomes a
//! test-run verdict: the surrounding test harness supplies an
//! implementation, and the engine never decides pass/fail on its own.
//!
//! [`FailureMode`]: crate::FailureMode

use std::sync::atomic::{AtomicBool, Ordering};

/// Receives failure reports from the sequencing loop.
///
/// Implementations:
/// - [`TracingSink`]: emit through `tracing`, remember the verdict
/// - `RecordingSink` (test-utils): collect events for inspection
/// - a harness adapter that fails the enclosing test framework's test
pub trait FailureSink: Send + Sync {
    /// Record a failure and keep the run going. The run is failed, but
    /// later steps still execute.
    fn non_fatal(&self, message: &str);

    /// Record a failure that stops the current batch. The engine stops
    /// dispatching immediately after this call returns.
    fn fatal(&self, message: &str);

    /// Informational trace with no failure implication.
    fn log(&self, message: &str);

    /// Whether any failure has been recorded.
    fn failed(&self) -> bool;
}

/// The default sink: reports through `tracing` and remembers whether
/// anything failed.
///
/// Fatal and non-fatal reports become `error!` events, logs become
/// `debug!` events. No subscriber is installed — wiring `tracing`
/// output up is the embedding application's choice.
#[derive(Debug, Default)]
pub struct TracingSink {
    failed: AtomicBool,
}

impl TracingSink {
    /// Create a sink with a clean verdict.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FailureSink for TracingSink {
    fn non_fatal(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        tracing::error!(fatal = false, "{message}");
    }

    fn fatal(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        tracing::error!(fatal = true, "{message}");
    }

    fn log(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

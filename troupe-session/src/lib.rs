#![deny(missing_docs)]
//! Session-owned actor registry and test lifecycle for troupe.
//!
//! A [`Session`] is the explicit, injectable home for a test's actors —
//! deliberately not a process-global map, so parallel tests cannot leak
//! actors into each other. It wires every actor it creates to one
//! shared [`FailureSink`] and (optionally) one [`Reporter`], brackets
//! the run with test start/finish events, and disposes of everything on
//! [`Session::shutdown`] or drop.
//!
//! ```
//! use troupe_session::Session;
//!
//! let session = Session::new("checkout_happy_path");
//! let ana = session.actor_called("Ana");
//! assert!(std::sync::Arc::ptr_eq(&ana, &session.actor_called("Ana")));
//! ```

use stage0::{Actor, FailureSink, Reporter, Status, TestResult, TracingSink};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

/// Owns the actors of one test run.
///
/// Actors are created lazily by name and shared: asking for the same
/// name twice returns the same instance, so a scenario can pick up "Ana"
/// in one helper and keep her abilities in another. All methods are
/// safe to call from multiple threads.
pub struct Session {
    test_name: String,
    actors: RwLock<HashMap<String, Arc<Actor>>>,
    sink: Arc<dyn FailureSink>,
    reporter: Option<Arc<dyn Reporter>>,
    started: Instant,
    finished: AtomicBool,
}

impl Session {
    /// Create a session reporting failures through the default
    /// [`TracingSink`], with no step reporter.
    pub fn new(test_name: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            actors: RwLock::new(HashMap::new()),
            sink: Arc::new(TracingSink::new()),
            reporter: None,
            started: Instant::now(),
            finished: AtomicBool::new(false),
        }
    }

    /// Replace the failure sink. Call before creating actors — already
    /// created actors keep the sink they were wired with.
    pub fn with_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Attach a reporter and announce the test start to it. Call before
    /// creating actors.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        reporter.on_test_start(&self.test_name);
        self.reporter = Some(reporter);
        self
    }

    /// The test name this session reports under.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Get or create the actor with the given name, wired to the
    /// session's sink and reporter.
    pub fn actor_called(&self, name: &str) -> Arc<Actor> {
        if let Some(actor) = self.actors.read().expect("actor registry lock poisoned").get(name) {
            return Arc::clone(actor);
        }

        let mut actors = self.actors.write().expect("actor registry lock poisoned");
        // Double-check after taking the write lock.
        Arc::clone(actors.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!(actor = name, test = %self.test_name, "creating actor");
            let mut actor = Actor::named(name).with_sink(Arc::clone(&self.sink));
            if let Some(reporter) = &self.reporter {
                actor = actor.with_reporter(Arc::clone(reporter));
            }
            Arc::new(actor)
        }))
    }

    /// Drop the registration for one actor. Existing handles stay
    /// usable; the next [`Session::actor_called`] with this name builds
    /// a fresh actor.
    pub fn forget_actor(&self, name: &str) {
        self.actors.write().expect("actor registry lock poisoned").remove(name);
    }

    /// Drop all actor registrations.
    pub fn forget_all(&self) {
        self.actors.write().expect("actor registry lock poisoned").clear();
    }

    /// Whether any actor reported a failure to the session's sink.
    pub fn failed(&self) -> bool {
        self.sink.failed()
    }

    /// Finish the test: emit the final result to the reporter and drop
    /// all actor registrations. Idempotent — later calls (including the
    /// one from `Drop`) do nothing.
    pub fn shutdown(&self) {
        if self.finished.swap(true, Ordering::SeqCst) {
            return;
        }

        if let Some(reporter) = &self.reporter {
            let failed = self.sink.failed();
            reporter.on_test_finish(&TestResult {
                name: self.test_name.clone(),
                status: if failed { Status::Failed } else { Status::Passed },
                duration: self.started.elapsed().into(),
                error: failed.then(|| "test failed".to_owned()),
            });
        }

        self.forget_all();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.actors.read().map(|a| a.len()).unwrap_or(0);
        f.debug_struct("Session")
            .field("test_name", &self.test_name)
            .field("actors", &count)
            .finish_non_exhaustive()
    }
}

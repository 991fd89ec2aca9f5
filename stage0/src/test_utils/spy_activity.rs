//! SpyActivity — records when it runs, so tests can observe ordering.

use crate::activity::{Activity, FailureMode};
use crate::actor::Actor;
use crate::error::ActivityError;
use std::sync::{Arc, Mutex};

/// Shared journal the spies append their labels to.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Create an empty shared journal.
pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// An activity that appends its label to a shared journal when
/// performed, and optionally fails with a configured message.
///
/// This is the side-effecting probe the sequencing-loop properties are
/// observed through: which spies ran, and in what order.
pub struct SpyActivity {
    label: String,
    journal: Journal,
    failure: Option<String>,
    mode: FailureMode,
}

impl SpyActivity {
    /// A spy that succeeds.
    pub fn succeeding(label: impl Into<String>, journal: &Journal) -> Self {
        Self {
            label: label.into(),
            journal: Arc::clone(journal),
            failure: None,
            mode: FailureMode::FailFast,
        }
    }

    /// A spy that fails with the given message under the given mode.
    pub fn failing(label: impl Into<String>, journal: &Journal, mode: FailureMode) -> Self {
        let label = label.into();
        Self {
            failure: Some(format!("{label} went wrong")),
            label,
            journal: Arc::clone(journal),
            mode,
        }
    }
}

impl Activity for SpyActivity {
    fn description(&self) -> String {
        self.label.clone()
    }

    fn perform_as(&self, _actor: &Actor) -> Result<(), ActivityError> {
        self.journal.lock().unwrap().push(self.label.clone());
        match &self.failure {
            Some(message) => Err(ActivityError::other(message.clone())),
            None => Ok(()),
        }
    }

    fn failure_mode(&self) -> FailureMode {
        self.mode
    }
}

//! The Actor — ability registry plus the sequencing/failure-mode loop.

use crate::ability::Ability;
use crate::activity::{Activity, FailureMode};
use crate::error::{MissingAbility, QuestionError};
use crate::question::Question;
use crate::report::{Reporter, Status, StepResult, resolve_description};
use crate::sink::{FailureSink, TracingSink};
use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, RwLock};
use std::time::Instant;

struct AbilityEntry {
    id: TypeId,
    instance: Arc<dyn Any + Send + Sync>,
}

/// A person or external system interacting with the system under test.
///
/// An actor holds a name, an append-only list of [`Ability`] instances,
/// and the reporting collaborators. It is the execution engine:
/// [`Actor::attempts_to`] runs activities strictly in order on the
/// calling thread and applies each step's [`FailureMode`] when it
/// fails.
///
/// ```
/// use stage0::{Actor, Interaction};
///
/// let ana = Actor::named("Ana");
/// ana.attempts_to(&[&Interaction::new("warms up", |_: &Actor| Ok(()))]);
/// ```
///
/// Ability access is race-free: `who_can` appends under a write lock
/// and `ability_to` scans under a read lock, so one actor may be
/// configured and used from several threads. Two concurrent
/// `attempts_to` batches get no isolation beyond that — if both touch
/// the same stateful ability, serializing them is the caller's job.
pub struct Actor {
    name: String,
    abilities: RwLock<Vec<AbilityEntry>>,
    sink: Arc<dyn FailureSink>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl Actor {
    /// Create an actor reporting through the default [`TracingSink`].
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abilities: RwLock::new(Vec::new()),
            sink: Arc::new(TracingSink::new()),
            reporter: None,
        }
    }

    /// Replace the failure sink. Typically called by the session that
    /// owns the actor, before the actor is shared.
    pub fn with_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Attach a step reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// The actor's name, used in reports and failure messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sink this actor reports failures to.
    pub fn sink(&self) -> &Arc<dyn FailureSink> {
        &self.sink
    }

    /// Grant the actor an ability. Returns `&Self` for chaining:
    ///
    /// ```
    /// use stage0::{Ability, Actor};
    ///
    /// struct CallAnApi;
    /// struct BrowseTheWeb;
    /// impl Ability for CallAnApi {}
    /// impl Ability for BrowseTheWeb {}
    ///
    /// let ana = Actor::named("Ana");
    /// ana.who_can(CallAnApi).who_can(BrowseTheWeb);
    /// ```
    pub fn who_can<A: Ability>(&self, ability: A) -> &Self {
        let mut abilities = self.abilities.write().expect("ability list lock poisoned");
        abilities.push(AbilityEntry {
            id: TypeId::of::<A>(),
            instance: Arc::new(ability),
        });
        self
    }

    /// Fetch an ability by concrete type.
    ///
    /// The list is scanned in insertion order; when the same type was
    /// granted twice, the first grant wins. Absence is a normal error —
    /// activities propagate it upward, where it becomes the step's
    /// failure in the sequencing loop.
    pub fn ability_to<A: Ability>(&self) -> Result<Arc<A>, MissingAbility> {
        let abilities = self.abilities.read().expect("ability list lock poisoned");
        abilities
            .iter()
            .find(|entry| entry.id == TypeId::of::<A>())
            .map(|entry| {
                Arc::clone(&entry.instance)
                    .downcast::<A>()
                    .unwrap_or_else(|_| unreachable!("entry type id matches requested ability type"))
            })
            .ok_or_else(|| MissingAbility {
                actor: self.name.clone(),
                ability: type_name::<A>(),
            })
    }

    /// Perform activities in the given order.
    ///
    /// For each activity: tell the reporter the step started, perform
    /// it, tell the reporter how it went, then — on failure — branch on
    /// the activity's [`FailureMode`]:
    ///
    /// - `FailFast`: report fatally to the sink and stop the batch.
    /// - `ErrorButContinue`: report non-fatally and keep going.
    /// - `Ignore`: a diagnostic log line at most.
    ///
    /// An empty batch is a no-op. Nothing runs concurrently and nothing
    /// is reordered.
    pub fn attempts_to(&self, activities: &[&dyn Activity]) {
        for activity in activities {
            let description = resolve_description(&activity.description(), &self.name);

            if let Some(reporter) = &self.reporter {
                reporter.on_step_start(&description);
            }
            let started = Instant::now();
            let outcome = activity.perform_as(self);
            if let Some(reporter) = &self.reporter {
                reporter.on_step_finish(&StepResult {
                    description: description.clone(),
                    status: if outcome.is_ok() { Status::Passed } else { Status::Failed },
                    duration: started.elapsed().into(),
                    error: outcome.as_ref().err().map(ToString::to_string),
                });
            }

            let Err(err) = outcome else { continue };
            match activity.failure_mode() {
                FailureMode::FailFast => {
                    self.sink.fatal(&format!("critical step '{description}' failed: {err}"));
                    return;
                }
                FailureMode::ErrorButContinue => {
                    self.sink.non_fatal(&format!("step '{description}' failed: {err}"));
                }
                FailureMode::Ignore => {
                    tracing::debug!(step = %description, error = %err, "step failed, ignoring");
                    self.sink.log(&format!("ignored failure in step '{description}': {err}"));
                }
            }
        }
    }

    /// Answer a question directly, without going through an assertion
    /// step.
    pub fn answers_to<Q: Question>(&self, question: &Q) -> Result<Q::Answer, QuestionError> {
        question.answered_by(self)
    }
}

impl std::fmt::Debug for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.abilities.read().map(|a| a.len()).unwrap_or(0);
        f.debug_struct("Actor")
            .field("name", &self.name)
            .field("abilities", &count)
            .finish_non_exhaustive()
    }
}

//! Ensure activity behavior: binding, wrapping, failure modes.

use stage0::test_utils::{RecordingSink, SinkEvent};
use stage0::{Activity, ActivityError, Actor, FailureMode, FailureSink, QuestionError};
use std::sync::Arc;
use troupe_expect::{contains, ensure, equals, greater_than, result_of, value_of};

fn quiet_actor(sink: &Arc<RecordingSink>) -> Actor {
    Actor::named("Ana").with_sink(sink.clone())
}

#[test]
fn a_satisfied_assertion_is_no_error() {
    let actor = Actor::named("Ana");
    let step = ensure::that(value_of(42), equals(42));
    assert!(step.perform_as(&actor).is_ok());
}

#[test]
fn a_failed_assertion_names_both_values() {
    let actor = Actor::named("Ana");
    let err = ensure::that(value_of(42), equals(43)).perform_as(&actor).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("42"));
    assert!(message.contains("43"));
    assert!(matches!(err, ActivityError::Assertion { .. }));
}

#[test]
fn substring_assertions_behave_per_catalog() {
    let actor = Actor::named("Ana");
    assert!(ensure::that(value_of("hello"), contains("ell")).perform_as(&actor).is_ok());
    assert!(ensure::that(value_of("hello"), contains("xyz")).perform_as(&actor).is_err());
}

#[test]
fn a_question_failure_is_not_an_assertion_failure() {
    let actor = Actor::named("Ana");
    let flaky = result_of("the unavailable count", |_actor: &Actor| -> Result<i64, QuestionError> {
        Err(QuestionError::failed("backend unavailable"))
    });

    let err = ensure::that(flaky, greater_than(0)).perform_as(&actor).unwrap_err();
    assert!(matches!(err, ActivityError::Question { .. }));
    let message = err.to_string();
    assert!(message.contains("failed to answer question"));
    assert!(message.contains("the unavailable count"));
    assert!(message.contains("backend unavailable"));
}

#[test]
fn description_is_a_pure_function_of_the_pairing() {
    let first = ensure::that(value_of(42), equals(42)).description();
    let second = ensure::that(value_of(42), equals(42)).description();
    assert_eq!(first, second);
    assert_eq!(first, "#actor ensures that 42 (i32) equals 42");
}

#[test]
fn default_failure_mode_lets_later_assertions_run() {
    let step = ensure::that(value_of(1), equals(2));
    assert_eq!(step.failure_mode(), FailureMode::ErrorButContinue);

    let sink = Arc::new(RecordingSink::new());
    let actor = quiet_actor(&sink);
    let first = ensure::that(value_of(1), equals(2));
    let second = ensure::that(value_of("a"), contains("b"));
    actor.attempts_to(&[&first, &second]);

    // Both assertion failures are collected; neither hides the other.
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| matches!(event, SinkEvent::NonFatal(_))));
    assert!(sink.failed());
}

#[test]
fn failure_mode_is_configurable_per_assertion() {
    let step = ensure::that(value_of(1), equals(2)).with_failure_mode(FailureMode::FailFast);
    assert_eq!(step.failure_mode(), FailureMode::FailFast);

    let sink = Arc::new(RecordingSink::new());
    let actor = quiet_actor(&sink);
    let gate = ensure::that(value_of(1), equals(2)).with_failure_mode(FailureMode::FailFast);
    let never = ensure::that(value_of(1), equals(1));
    actor.attempts_to(&[&gate, &never]);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], SinkEvent::Fatal(_)));
}

#[test]
fn value_of_answers_identically_for_any_actor() {
    let ana = Actor::named("Ana");
    let bea = Actor::named("Bea");
    let question = value_of(vec![1, 2, 3]);
    assert_eq!(ana.answers_to(&question).unwrap(), vec![1, 2, 3]);
    assert_eq!(bea.answers_to(&question).unwrap(), vec![1, 2, 3]);
}

#[test]
fn result_of_runs_against_the_asking_actor() {
    let actor = Actor::named("Ana");
    let greeting = result_of("the actor's greeting", |actor: &Actor| {
        Ok(format!("Hello, {}", actor.name()))
    });
    assert_eq!(actor.answers_to(&greeting).unwrap(), "Hello, Ana");

    let step = ensure::that(greeting, contains("Ana"));
    assert!(step.perform_as(&actor).is_ok());
}

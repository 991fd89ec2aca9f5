//! Session lifecycle: registry identity, forgetting, shutdown reporting.

use stage0::test_utils::{RecordingReporter, RecordingSink, ReportEvent};
use stage0::{Actor, Status};
use std::sync::Arc;
use troupe_expect::{ensure, equals, value_of};
use troupe_session::Session;

#[test]
fn actor_called_returns_the_same_instance_per_name() {
    let session = Session::new("registry");
    let first = session.actor_called("Ana");
    let again = session.actor_called("Ana");
    let other = session.actor_called("Bea");

    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn forgotten_actors_are_rebuilt_on_next_use() {
    let session = Session::new("registry");
    let first = session.actor_called("Ana");
    session.forget_actor("Ana");
    let rebuilt = session.actor_called("Ana");
    assert!(!Arc::ptr_eq(&first, &rebuilt));

    session.forget_all();
    assert!(!Arc::ptr_eq(&rebuilt, &session.actor_called("Ana")));
}

#[test]
fn actors_share_the_session_sink() {
    let sink = Arc::new(RecordingSink::new());
    let session = Session::new("verdict").with_sink(sink.clone());

    let ana = session.actor_called("Ana");
    let failing = ensure::that(value_of(1), equals(2));
    ana.attempts_to(&[&failing]);

    assert!(session.failed());
    assert_eq!(sink.failure_messages().len(), 1);
}

#[test]
fn a_clean_run_reports_a_passed_test_once() {
    let reporter = Arc::new(RecordingReporter::new());
    let session = Session::new("clean").with_reporter(reporter.clone());

    let ana = session.actor_called("Ana");
    let fine = ensure::that(value_of(1), equals(1));
    ana.attempts_to(&[&fine]);

    session.shutdown();
    session.shutdown(); // idempotent
    drop(session); // and Drop does not double-report

    let finishes: Vec<_> = reporter
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ReportEvent::TestFinished(result) => Some(result),
            _ => None,
        })
        .collect();
    assert_eq!(finishes.len(), 1);
    assert_eq!(finishes[0].name, "clean");
    assert_eq!(finishes[0].status, Status::Passed);
    assert!(finishes[0].error.is_none());
}

#[test]
fn a_failed_run_reports_a_failed_test_on_drop() {
    let sink = Arc::new(RecordingSink::new());
    let reporter = Arc::new(RecordingReporter::new());
    {
        let session = Session::new("red")
            .with_sink(sink.clone())
            .with_reporter(reporter.clone());
        let ana = session.actor_called("Ana");
        let failing = ensure::that(value_of("actual"), equals("expected"));
        ana.attempts_to(&[&failing]);
    } // dropped without explicit shutdown

    let events = reporter.events();
    assert!(matches!(&events[0], ReportEvent::TestStarted(name) if name == "red"));
    assert!(events.iter().any(|event| matches!(
        event,
        ReportEvent::TestFinished(result) if result.status == Status::Failed
    )));
}

#[test]
fn session_actors_report_steps_through_the_session_reporter() {
    let reporter = Arc::new(RecordingReporter::new());
    let session = Session::new("steps").with_reporter(reporter.clone());

    let ana = session.actor_called("Ana");
    let step = ensure::that(value_of(2), equals(2));
    ana.attempts_to(&[&step]);

    let started = reporter.started_steps();
    assert_eq!(started, vec!["Ana ensures that 2 (i32) equals 2".to_owned()]);
}

#[test]
fn sessions_are_usable_across_threads() {
    let session = Arc::new(Session::new("parallel"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = Arc::clone(&session);
            std::thread::spawn(move || {
                let actor = session.actor_called(&format!("Actor-{i}"));
                assert_eq!(actor.name(), format!("Actor-{i}"));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn session_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    let _ = assert_send_sync::<Actor>;
}

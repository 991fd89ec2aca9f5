//! In-memory fakes for testing.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that prove the contracts are usable and give
//! screenplay tests something to observe.

mod notepad;
mod recording_reporter;
mod recording_sink;
mod spy_activity;

pub use notepad::Notepad;
pub use recording_reporter::{RecordingReporter, ReportEvent};
pub use recording_sink::{RecordingSink, SinkEvent};
pub use spy_activity::{Journal, SpyActivity, journal};

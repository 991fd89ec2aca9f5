#![deny(missing_docs)]
//! Console and JSON-lines implementations of the troupe [`Reporter`]
//! contract.
//!
//! [`ConsoleReporter`] renders human-readable step/test lines with
//! pass/fail markers and durations; [`JsonLinesReporter`] emits one
//! JSON object per event for machine consumption. Both write to
//! `stdout` by default and accept any `Write + Send` destination, so
//! tests can capture output or point it at a file.
//!
//! [`Reporter`]: stage0::Reporter

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::JsonLinesReporter;

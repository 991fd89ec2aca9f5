//! Notepad — a tiny stateful ability for tests and examples.

use crate::ability::Ability;
use std::collections::HashMap;
use std::sync::Mutex;

/// An ability holding a key/value scratchpad.
///
/// Stands in for a real capability (an API client, a database handle)
/// in tests: activities write to it, questions read from it. Interior
/// mutability is the ability's own, as the actor hands out shared
/// references.
#[derive(Debug, Default)]
pub struct Notepad {
    entries: Mutex<HashMap<String, String>>,
}

impl Notepad {
    /// Create an empty notepad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an entry, replacing any previous value for the key.
    pub fn write(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.lock().unwrap().insert(key.into(), value.into());
    }

    /// Read an entry.
    pub fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the notepad holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl Ability for Notepad {}

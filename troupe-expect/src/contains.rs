//! Containment checks: substrings and map keys.

use crate::util::value_kind;
use serde_json::Value;
use stage0::{Expectation, ExpectationError};
use std::collections::{BTreeMap, HashMap};

/// Expectation that a string answer contains a substring.
///
/// An empty needle is always satisfied, including against an empty
/// actual — conventional substring semantics. (Earlier variants of this
/// check failed any empty actual outright; that asymmetry was
/// accidental and is deliberately not reproduced.) A non-empty needle
/// against an empty actual always fails.
pub struct Contains {
    needle: String,
}

/// The answer must contain `needle`.
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains { needle: needle.into() }
}

impl Contains {
    fn check(&self, actual: &str) -> Result<(), ExpectationError> {
        if self.needle.is_empty() {
            return Ok(());
        }
        if actual.is_empty() {
            return Err(ExpectationError::Unsatisfied(format!(
                "expected string to contain '{}', but got an empty string",
                self.needle
            )));
        }
        if actual.contains(&self.needle) {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected string to contain '{}', but got '{actual}'",
                self.needle
            )))
        }
    }

    fn describe(&self) -> String {
        format!("contains '{}'", self.needle)
    }
}

impl Expectation<String> for Contains {
    fn evaluate(&self, actual: &String) -> Result<(), ExpectationError> {
        self.check(actual)
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<'a> Expectation<&'a str> for Contains {
    fn evaluate(&self, actual: &&'a str) -> Result<(), ExpectationError> {
        self.check(actual)
    }

    fn description(&self) -> String {
        self.describe()
    }
}

/// Expectation that a map-shaped answer holds a key.
///
/// Applies to string-keyed `HashMap`/`BTreeMap` answers and to
/// `serde_json::Value` objects. A non-object `Value` is a usage error,
/// not a miss.
pub struct ContainsKey {
    key: String,
}

/// The answer must contain the key `key`.
pub fn contains_key(key: impl Into<String>) -> ContainsKey {
    ContainsKey { key: key.into() }
}

impl ContainsKey {
    fn absent(&self) -> ExpectationError {
        ExpectationError::Unsatisfied(format!("expected map to contain key '{}'", self.key))
    }

    fn describe(&self) -> String {
        format!("contains key '{}'", self.key)
    }
}

impl<V: Send + Sync> Expectation<HashMap<String, V>> for ContainsKey {
    fn evaluate(&self, actual: &HashMap<String, V>) -> Result<(), ExpectationError> {
        if actual.contains_key(&self.key) { Ok(()) } else { Err(self.absent()) }
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<V: Send + Sync> Expectation<BTreeMap<String, V>> for ContainsKey {
    fn evaluate(&self, actual: &BTreeMap<String, V>) -> Result<(), ExpectationError> {
        if actual.contains_key(&self.key) { Ok(()) } else { Err(self.absent()) }
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl Expectation<Value> for ContainsKey {
    fn evaluate(&self, actual: &Value) -> Result<(), ExpectationError> {
        match actual {
            Value::Object(map) => {
                if map.contains_key(&self.key) { Ok(()) } else { Err(self.absent()) }
            }
            other => Err(ExpectationError::Usage(format!(
                "expected a map, but got a {} value",
                value_kind(other)
            ))),
        }
    }

    fn description(&self) -> String {
        self.describe()
    }
}

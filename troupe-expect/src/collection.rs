//! Emptiness and length checks for collection-shaped answers.

use crate::util::value_kind;
use serde_json::Value;
use stage0::{Expectation, ExpectationError};
use std::collections::{BTreeMap, HashMap};

/// Expectation that an answer is empty.
///
/// Applies to strings, vectors/slices, string-keyed maps, and
/// `serde_json::Value` strings/arrays/objects. Any other `Value` shape
/// is a usage error, not a negative result.
pub struct IsEmpty;

/// The answer must hold nothing.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

const IS_EMPTY: &str = "is empty";

impl IsEmpty {
    fn not_empty(kind: &str, len: usize) -> ExpectationError {
        ExpectationError::Unsatisfied(format!("expected {kind} to be empty, but got {len} elements"))
    }
}

impl Expectation<String> for IsEmpty {
    fn evaluate(&self, actual: &String) -> Result<(), ExpectationError> {
        if actual.is_empty() {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected string to be empty, but got '{actual}'"
            )))
        }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

impl<'a> Expectation<&'a str> for IsEmpty {
    fn evaluate(&self, actual: &&'a str) -> Result<(), ExpectationError> {
        if actual.is_empty() {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected string to be empty, but got '{actual}'"
            )))
        }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

impl<T: Send + Sync> Expectation<Vec<T>> for IsEmpty {
    fn evaluate(&self, actual: &Vec<T>) -> Result<(), ExpectationError> {
        if actual.is_empty() { Ok(()) } else { Err(Self::not_empty("collection", actual.len())) }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

impl<K: Send + Sync, V: Send + Sync> Expectation<HashMap<K, V>> for IsEmpty {
    fn evaluate(&self, actual: &HashMap<K, V>) -> Result<(), ExpectationError> {
        if actual.is_empty() { Ok(()) } else { Err(Self::not_empty("map", actual.len())) }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

impl<K: Send + Sync, V: Send + Sync> Expectation<BTreeMap<K, V>> for IsEmpty {
    fn evaluate(&self, actual: &BTreeMap<K, V>) -> Result<(), ExpectationError> {
        if actual.is_empty() { Ok(()) } else { Err(Self::not_empty("map", actual.len())) }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

impl Expectation<Value> for IsEmpty {
    fn evaluate(&self, actual: &Value) -> Result<(), ExpectationError> {
        match actual {
            Value::String(s) => {
                if s.is_empty() {
                    Ok(())
                } else {
                    Err(ExpectationError::Unsatisfied(format!(
                        "expected string to be empty, but got '{s}'"
                    )))
                }
            }
            Value::Array(items) => {
                if items.is_empty() { Ok(()) } else { Err(Self::not_empty("array", items.len())) }
            }
            Value::Object(map) => {
                if map.is_empty() { Ok(()) } else { Err(Self::not_empty("map", map.len())) }
            }
            other => Err(ExpectationError::Usage(format!(
                "emptiness only applies to strings, arrays, and maps, but got a {} value",
                value_kind(other)
            ))),
        }
    }

    fn description(&self) -> String {
        IS_EMPTY.to_owned()
    }
}

/// Expectation that an answer has an exact length.
///
/// Applies to strings (byte length, as `str::len` counts), vectors,
/// slices, arrays, and `serde_json::Value` strings/arrays. Other shapes
/// are a usage error.
pub struct HasLength {
    expected: usize,
}

/// The answer's length must be exactly `expected`.
pub fn has_length(expected: usize) -> HasLength {
    HasLength { expected }
}

impl HasLength {
    fn check(&self, actual: usize) -> Result<(), ExpectationError> {
        if actual == self.expected {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected length to be {}, but got {actual}",
                self.expected
            )))
        }
    }

    fn describe(&self) -> String {
        format!("has length {}", self.expected)
    }
}

impl Expectation<String> for HasLength {
    fn evaluate(&self, actual: &String) -> Result<(), ExpectationError> {
        self.check(actual.len())
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<'a> Expectation<&'a str> for HasLength {
    fn evaluate(&self, actual: &&'a str) -> Result<(), ExpectationError> {
        self.check(actual.len())
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<T: Send + Sync> Expectation<Vec<T>> for HasLength {
    fn evaluate(&self, actual: &Vec<T>) -> Result<(), ExpectationError> {
        self.check(actual.len())
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<'a, T: Sync> Expectation<&'a [T]> for HasLength {
    fn evaluate(&self, actual: &&'a [T]) -> Result<(), ExpectationError> {
        self.check(actual.len())
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl<T: Send + Sync, const N: usize> Expectation<[T; N]> for HasLength {
    fn evaluate(&self, _actual: &[T; N]) -> Result<(), ExpectationError> {
        self.check(N)
    }

    fn description(&self) -> String {
        self.describe()
    }
}

impl Expectation<Value> for HasLength {
    fn evaluate(&self, actual: &Value) -> Result<(), ExpectationError> {
        match actual {
            Value::String(s) => self.check(s.len()),
            Value::Array(items) => self.check(items.len()),
            other => Err(ExpectationError::Usage(format!(
                "length only applies to strings and arrays, but got a {} value",
                value_kind(other)
            ))),
        }
    }

    fn description(&self) -> String {
        self.describe()
    }
}

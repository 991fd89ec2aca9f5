//! Structural equality.

use stage0::{Expectation, ExpectationError};
use std::fmt::Debug;

/// Expectation that the actual value is structurally equal to an
/// expected one. The failure message states both sides.
pub struct Equals<T> {
    expected: T,
}

/// The answer must equal `expected`.
pub fn equals<T>(expected: T) -> Equals<T> {
    Equals { expected }
}

impl<T> Expectation<T> for Equals<T>
where
    T: PartialEq + Debug + Send + Sync,
{
    fn evaluate(&self, actual: &T) -> Result<(), ExpectationError> {
        if *actual == self.expected {
            Ok(())
        } else {
            Err(ExpectationError::Mismatch {
                expected: format!("{:?}", self.expected),
                actual: format!("{actual:?}"),
            })
        }
    }

    fn description(&self) -> String {
        format!("equals {:?}", self.expected)
    }
}

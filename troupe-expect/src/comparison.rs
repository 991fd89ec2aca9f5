//! Numeric comparison through f64 coercion.

use stage0::{Expectation, ExpectationError};
use std::fmt::Display;

/// Values the comparison expectations can coerce to `f64`.
///
/// Implemented for the primitive integer and float types and for
/// `serde_json::Value`, where only number values coerce — comparing
/// against a JSON string or object is a usage error, not "not
/// satisfied".
pub trait Numeric: Send + Sync + Display {
    /// The `f64` view of the value, or `None` when it is not numeric.
    fn as_f64(&self) -> Option<f64>;
}

macro_rules! numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl Numeric for serde_json::Value {
    fn as_f64(&self) -> Option<f64> {
        serde_json::Value::as_f64(self)
    }
}

fn coerce(value: &dyn Numeric, side: &str) -> Result<f64, ExpectationError> {
    value.as_f64().ok_or_else(|| {
        ExpectationError::Usage(format!("cannot compare {side} value {value}: not a number"))
    })
}

/// Expectation that a numeric answer is strictly greater than a bound.
pub struct GreaterThan<E> {
    expected: E,
}

/// The answer must be strictly greater than `expected`.
pub fn greater_than<E: Numeric>(expected: E) -> GreaterThan<E> {
    GreaterThan { expected }
}

impl<T: Numeric, E: Numeric> Expectation<T> for GreaterThan<E> {
    fn evaluate(&self, actual: &T) -> Result<(), ExpectationError> {
        let actual_value = coerce(actual, "actual")?;
        let expected_value = coerce(&self.expected, "expected")?;
        if actual_value > expected_value {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected value to be greater than {}, but got {actual}",
                self.expected
            )))
        }
    }

    fn description(&self) -> String {
        format!("is greater than {}", self.expected)
    }
}

/// Expectation that a numeric answer is strictly less than a bound.
pub struct LessThan<E> {
    expected: E,
}

/// The answer must be strictly less than `expected`.
pub fn less_than<E: Numeric>(expected: E) -> LessThan<E> {
    LessThan { expected }
}

impl<T: Numeric, E: Numeric> Expectation<T> for LessThan<E> {
    fn evaluate(&self, actual: &T) -> Result<(), ExpectationError> {
        let actual_value = coerce(actual, "actual")?;
        let expected_value = coerce(&self.expected, "expected")?;
        if actual_value < expected_value {
            Ok(())
        } else {
            Err(ExpectationError::Unsatisfied(format!(
                "expected value to be less than {}, but got {actual}",
                self.expected
            )))
        }
    }

    fn description(&self) -> String {
        format!("is less than {}", self.expected)
    }
}

//! The escape hatch: wrap any predicate function as an expectation.

use stage0::{Expectation, ExpectationError};

/// Expectation built from an arbitrary predicate function and a
/// user-supplied description. This is how the catalog stays open-ended
/// without growing new built-in types.
pub struct Satisfies<T> {
    description: String,
    check: Box<dyn Fn(&T) -> Result<(), ExpectationError> + Send + Sync>,
}

/// The answer must satisfy `check`.
///
/// ```
/// use stage0::ExpectationError;
/// use troupe_expect::satisfies;
///
/// let positive = satisfies("is positive", |actual: &i64| {
///     if *actual > 0 {
///         Ok(())
///     } else {
///         Err(ExpectationError::Unsatisfied(format!(
///             "expected a positive value, but got {actual}"
///         )))
///     }
/// });
/// ```
pub fn satisfies<T, F>(description: impl Into<String>, check: F) -> Satisfies<T>
where
    F: Fn(&T) -> Result<(), ExpectationError> + Send + Sync + 'static,
{
    Satisfies {
        description: description.into(),
        check: Box::new(check),
    }
}

impl<T> Expectation<T> for Satisfies<T> {
    fn evaluate(&self, actual: &T) -> Result<(), ExpectationError> {
        (self.check)(actual)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

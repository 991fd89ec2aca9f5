//! Question builders: lift static values and closures into questions.

use stage0::{Actor, Question, QuestionError};
use std::fmt::Debug;

/// A question that answers with a fixed value, whoever asks.
///
/// Useful for asserting against computed or literal values with the
/// same machinery as real system queries. An error value is treated as
/// a value like any other — it becomes the answer, not a failure.
pub struct ValueOf<T> {
    value: T,
}

/// A question answering `value` for any actor.
pub fn value_of<T>(value: T) -> ValueOf<T>
where
    T: Clone + Debug + Send + Sync,
{
    ValueOf { value }
}

impl<T> Question for ValueOf<T>
where
    T: Clone + Debug + Send + Sync,
{
    type Answer = T;

    fn answered_by(&self, _actor: &Actor) -> Result<T, QuestionError> {
        Ok(self.value.clone())
    }

    fn description(&self) -> String {
        format!("{:?} ({})", self.value, std::any::type_name::<T>())
    }
}

/// A question that answers by running a closure against the actor.
pub struct ResultOf<T> {
    description: String,
    supplier: Box<dyn Fn(&Actor) -> Result<T, QuestionError> + Send + Sync>,
}

/// A question with a custom description, answered by `supplier`.
///
/// ```
/// use troupe_expect::result_of;
///
/// let greeting = result_of("the actor's greeting", |actor| {
///     Ok(format!("Hello, {}", actor.name()))
/// });
/// ```
pub fn result_of<T, F>(description: impl Into<String>, supplier: F) -> ResultOf<T>
where
    F: Fn(&Actor) -> Result<T, QuestionError> + Send + Sync + 'static,
{
    ResultOf {
        description: description.into(),
        supplier: Box::new(supplier),
    }
}

impl<T> Question for ResultOf<T> {
    type Answer = T;

    fn answered_by(&self, actor: &Actor) -> Result<T, QuestionError> {
        (self.supplier)(actor)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

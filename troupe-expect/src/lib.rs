#![deny(missing_docs)]
//! Built-in expectations, the `Ensure` assertion activity, and question
//! builders for troupe.
//!
//! A [`Question`] retrieves a value; an [`Expectation`] judges one.
//! [`ensure::that`] binds a matching pair into an [`Activity`] so the
//! assertion runs as an ordinary step in `attempts_to`:
//!
//! ```
//! use stage0::Actor;
//! use troupe_expect::{contains, ensure, equals, value_of};
//!
//! let ana = Actor::named("Ana");
//! ana.attempts_to(&[
//!     &ensure::that(value_of(42), equals(42)),
//!     &ensure::that(value_of("hello"), contains("ell")),
//! ]);
//! ```
//!
//! The catalog stays open-ended through [`satisfies`], which wraps any
//! predicate function with a description.
//!
//! [`Question`]: stage0::Question
//! [`Expectation`]: stage0::Expectation
//! [`Activity`]: stage0::Activity

pub mod answerable;
pub mod collection;
pub mod comparison;
pub mod contains;
pub mod ensure;
pub mod equals;
pub mod satisfies;

mod util;

// Re-exports for convenience
pub use answerable::{ResultOf, ValueOf, result_of, value_of};
pub use collection::{HasLength, IsEmpty, has_length, is_empty};
pub use comparison::{GreaterThan, LessThan, Numeric, greater_than, less_than};
pub use contains::{Contains, ContainsKey, contains, contains_key};
pub use ensure::Ensure;
pub use equals::{Equals, equals};
pub use satisfies::{Satisfies, satisfies};

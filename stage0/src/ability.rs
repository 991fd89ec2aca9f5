//! The Ability marker — opaque capabilities an actor holds.

use std::any::Any;

/// An opaque capability that grants an actor a kind of interaction —
/// calling an HTTP API, reaching a database, holding session state.
///
/// The engine imposes no methods. An ability only needs to be a
/// recognizable concrete type: [`Actor::ability_to`] matches by
/// `TypeId`, so two abilities shaped the same way but named differently
/// are distinct capabilities. Mark your type and hand an instance to
/// [`Actor::who_can`]:
///
/// ```
/// use stage0::Ability;
///
/// struct CallAnApi {
///     base_url: String,
/// }
///
/// impl Ability for CallAnApi {}
/// ```
///
/// Abilities that carry mutable state (a "last response" field, a
/// connection pool) manage their own interior mutability — the actor
/// hands out shared references and never locks around your methods.
///
/// [`Actor::ability_to`]: crate::Actor::ability_to
/// [`Actor::who_can`]: crate::Actor::who_can
pub trait Ability: Any + Send + Sync {}

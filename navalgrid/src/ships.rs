//! Types used for defining ships, their kinds and the damage they have taken.
use std::{fmt::Debug, hash::Hash};

pub use self::{
    errors::{InvalidDiscriminant, StateError},
    kind::{Orientation, ShipKind},
    ship::{DamageState, Ship},
};

mod errors;
mod kind;
mod ship;

/// Trait for types that can be used as a Ship's ID within a single player's board.
/// IDs are treated as disposable and cheaply cloneable. If you need a complex ID type
/// that isn't cheap to clone, you may want to wrap it in `Rc` or `Arc`.
///
/// Auto-implemented for any type which implements `Debug`,`Clone`, `Eq`, and `Hash`.
pub trait ShipId: Debug + Clone + Eq + Hash {}
impl<T: Debug + Clone + Eq + Hash> ShipId for T {}

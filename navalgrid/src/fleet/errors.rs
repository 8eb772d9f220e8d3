//! Errors used by the [`ShipsFleet`][crate::fleet::ShipsFleet].

use std::fmt::Debug;

use thiserror::Error;

use crate::ships::ShipKind;

/// Error returned when constructing a fleet with no ships in its inventory.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("available fleet should not be empty")]
pub struct EmptyFleetError;

/// Reason why a ship could not be called up.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotCallUpReason {
    /// No ship of this kind is waiting in the available inventory.
    #[error("no ship of this kind is available")]
    Unavailable,
    /// This ship is already deployed.
    #[error("ship is already deployed")]
    AlreadyDeployed,
}

/// Error returned when calling up a ship fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not call up {kind} {id:?}: {reason}")]
pub struct CallUpError<I: Debug> {
    #[source]
    reason: CannotCallUpReason,
    id: I,
    kind: ShipKind,
}

impl<I: Debug> CallUpError<I> {
    pub(super) fn new(reason: CannotCallUpReason, id: I, kind: ShipKind) -> Self {
        Self { reason, id, kind }
    }

    pub fn reason(&self) -> CannotCallUpReason {
        self.reason
    }

    /// The id of the ship that was not called up.
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }
}

/// Reason why a ship could not be called off.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotCallOffReason {
    /// No ship of this kind has left the available inventory.
    #[error("no ship of this kind was called up")]
    NeverCalledUp,
    /// This particular ship is not among the deployed ships.
    #[error("ship is not deployed")]
    NotDeployed,
}

/// Error returned when calling off a ship fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not call off {kind} {id:?}: {reason}")]
pub struct CallOffError<I: Debug> {
    #[source]
    reason: CannotCallOffReason,
    id: I,
    kind: ShipKind,
}

impl<I: Debug> CallOffError<I> {
    pub(super) fn new(reason: CannotCallOffReason, id: I, kind: ShipKind) -> Self {
        Self { reason, id, kind }
    }

    pub fn reason(&self) -> CannotCallOffReason {
        self.reason
    }

    /// The id of the ship that was not called off.
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }
}

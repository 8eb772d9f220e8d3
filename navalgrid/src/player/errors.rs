//! Errors used by the [`Player`][crate::player::Player].

use std::fmt::{self, Debug};

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{
    board::CannotPlaceReason,
    fleet::{CannotCallOffReason, CannotCallUpReason},
    player::Component,
    ships::{Ship, ShipId},
};

#[cfg(feature = "rng_gen")]
use crate::ships::ShipKind;

/// Reason why a player could not put a ship on their grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPutReason {
    /// The player has no grid or fleet of their own attached.
    #[error("player is missing {0:?}")]
    Missing(BitFlags<Component>),
    /// The fleet refused to call the ship up.
    #[error("{0}")]
    CallUp(CannotCallUpReason),
    /// The grid refused the placement.
    #[error("{0}")]
    Place(CannotPlaceReason),
}

/// Error returned when a player fails to put a ship on their grid. Hands the ship back
/// to the caller.
#[derive(Error)]
#[error("could not put ship {:?}: {reason}", .ship.id())]
pub struct PutShipError<I: ShipId> {
    reason: CannotPutReason,
    ship: Ship<I>,
}

impl<I: ShipId> Debug for PutShipError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<I: ShipId> PutShipError<I> {
    pub(super) fn new(reason: CannotPutReason, ship: Ship<I>) -> Self {
        Self { reason, ship }
    }

    pub fn reason(&self) -> CannotPutReason {
        self.reason
    }

    pub fn ship(&self) -> &Ship<I> {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship<I> {
        self.ship
    }
}

/// Reason why a player could not take a ship off their grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotTakeOffReason {
    /// The player has no grid or fleet of their own attached.
    #[error("player is missing {0:?}")]
    Missing(BitFlags<Component>),
    /// The ship is not on the player's grid.
    #[error("ship is not placed")]
    NotPlaced,
    /// The fleet refused to call the ship off.
    #[error("{0}")]
    CallOff(CannotCallOffReason),
}

/// Error returned when a player fails to take a ship off their grid.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not take off ship {id:?}: {reason}")]
pub struct TakeOffShipError<I: Debug> {
    reason: CannotTakeOffReason,
    id: I,
}

impl<I: Debug> TakeOffShipError<I> {
    pub(super) fn new(reason: CannotTakeOffReason, id: I) -> Self {
        Self { reason, id }
    }

    pub fn reason(&self) -> CannotTakeOffReason {
        self.reason
    }

    pub fn id(&self) -> &I {
        &self.id
    }
}

/// Error returned when random deployment cannot finish.
#[cfg(feature = "rng_gen")]
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DeployError {
    /// The player has no grid or fleet of their own attached.
    #[error("player is missing {0:?}")]
    Missing(BitFlags<Component>),
    /// No free position was found for a ship of this kind.
    #[error("unable to find a free position for a {0}")]
    UnableToPlace(ShipKind),
}

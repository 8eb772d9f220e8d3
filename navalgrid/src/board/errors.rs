//! Errors used by the [`Grid`][crate::board::Grid].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::{Coordinate, MAX_SIZE, MIN_SIZE},
    ships::{Ship, ShipId},
};

/// Error returned when constructing a grid with an unsupported size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("grid size should be between {} and {}, got {size}", MIN_SIZE, MAX_SIZE)]
pub struct GridSizeError {
    size: usize,
}

impl GridSizeError {
    pub(super) fn new(size: usize) -> Self {
        Self { size }
    }

    /// The size that was rejected.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reason why a ship could not be placed at its position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// A ship with the same ID is already on the grid.
    #[error("a ship with the same id is already placed")]
    AlreadyPlaced,
    /// Part of the ship would lie outside the grid.
    #[error("ship doesn't fit in the grid")]
    DoesNotFit,
    /// The ship would cover a cell that is taken or in another ship's buffer zone.
    #[error("ship collides with another ship")]
    Collides,
}

/// Error caused when attempting to place a ship in an invalid position. Hands the ship
/// back to the caller.
#[derive(Error)]
#[error("could not place ship {:?}: {reason}", .ship.id())]
pub struct PlaceError<I: ShipId> {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship<I>,
}

impl<I: ShipId> Debug for PlaceError<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<I: ShipId> PlaceError<I> {
    pub(crate) fn new(reason: CannotPlaceReason, ship: Ship<I>) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship<I> {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship<I> {
        self.ship
    }
}

/// Error returned when removing a ship that is not on the grid.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("ship {id:?} isn't placed on this grid")]
pub struct TakeOffError<I: Debug> {
    id: I,
}

impl<I: Debug> TakeOffError<I> {
    pub(super) fn new(id: I) -> Self {
        Self { id }
    }

    /// The id of the ship that was not found.
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn into_id(self) -> I {
        self.id
    }
}

/// Reason why a shot could not be resolved against the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The shot's row or column is beyond the grid's size.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
    /// The shot already carries a result.
    #[error("the shot was already resolved")]
    AlreadyResolved,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

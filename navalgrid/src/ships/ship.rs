use std::convert::TryFrom;

use crate::{
    board::Coordinate,
    ships::{InvalidDiscriminant, Orientation, ShipKind, StateError},
};

/// Damage state of a ship. Ships only ever move forward through these states.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DamageState {
    Undamaged,
    Damaged,
    Destroyed,
}

impl TryFrom<u8> for DamageState {
    type Error = InvalidDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DamageState::Undamaged),
            1 => Ok(DamageState::Damaged),
            2 => Ok(DamageState::Destroyed),
            other => Err(InvalidDiscriminant::new("damage state", other)),
        }
    }
}

/// A ship that can be placed on a [`Grid`][crate::board::Grid] and take damage.
///
/// A ship's size comes from its [`ShipKind`], so it is fixed for every ship of that kind.
/// Health starts at the size and is never increased.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship<I> {
    /// ID of the ship, unique within one player's board.
    id: I,
    /// Kind of ship, which decides its size.
    kind: ShipKind,
    /// Direction the ship extends from its offset.
    orientation: Orientation,
    /// Top-left cell of the ship.
    offset: Coordinate,
    /// Remaining health. Can drop below zero when a damaged ship keeps getting hit.
    health: i32,
    /// Current damage state.
    state: DamageState,
}

impl<I> Ship<I> {
    /// Construct an undamaged ship of the given kind with its top-left cell at
    /// `(row, col)`.
    pub fn new(id: I, kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            id,
            kind,
            orientation,
            offset: Coordinate::new(row, col),
            health: kind.size() as i32,
            state: DamageState::Undamaged,
        }
    }

    /// Get the ID of the ship.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Get the kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Number of cells occupied by this ship.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of this ship.
    pub fn offset(&self) -> Coordinate {
        self.offset
    }

    pub fn row(&self) -> usize {
        self.offset.row
    }

    pub fn col(&self) -> usize {
        self.offset.col
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn state(&self) -> DamageState {
        self.state
    }

    /// Returns true once the ship has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.state == DamageState::Destroyed
    }

    /// Move the ship's top-left cell. Placed ships are owned by their grid, so this only
    /// affects ships that are not on a grid.
    pub fn set_position(&mut self, row: usize, col: usize) {
        self.offset = Coordinate::new(row, col);
    }

    /// Change the orientation of a ship that is not on a grid.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Force the damage state forward. Returns an error and leaves the ship unchanged if
    /// `state` is behind the current state.
    pub fn set_state(&mut self, state: DamageState) -> Result<(), StateError> {
        if state < self.state {
            Err(StateError::new(self.state, state))
        } else {
            self.state = state;
            Ok(())
        }
    }

    /// Get an iterator over the cells this ship covers, starting at its offset. Cells past
    /// the largest representable coordinate are left out.
    pub fn footprint(&self) -> impl Iterator<Item = Coordinate> {
        let (offset, orientation) = (self.offset, self.orientation);
        (0..self.size()).filter_map(move |step| orientation.advance(offset, step))
    }

    /// Apply one hit to this ship and return the resulting state.
    ///
    /// An undamaged ship becomes damaged and loses one health. A damaged ship is
    /// destroyed when the hit lands while its health is exactly 1, and loses one health
    /// either way. Destroyed ships are not affected.
    pub(crate) fn take_hit(&mut self) -> DamageState {
        match self.state {
            DamageState::Undamaged => {
                self.state = DamageState::Damaged;
                self.health -= 1;
            }
            DamageState::Damaged => {
                if self.health == 1 {
                    self.state = DamageState::Destroyed;
                }
                self.health -= 1;
            }
            DamageState::Destroyed => {}
        }
        self.state
    }
}

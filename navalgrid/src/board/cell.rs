//! A single tracked position on a [`Grid`][crate::board::Grid].

use std::convert::TryFrom;

use crate::ships::{InvalidDiscriminant, ShipId};

/// Occupancy of a cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water. Untracked positions are free too.
    Free,
    /// Next to one or more ships, so nothing else may be placed here.
    Buffer,
    /// Occupied by a ship.
    Taken,
}

impl TryFrom<u8> for CellState {
    type Error = InvalidDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Free),
            1 => Ok(CellState::Buffer),
            2 => Ok(CellState::Taken),
            other => Err(InvalidDiscriminant::new("cell state", other)),
        }
    }
}

/// A single cell in the player's grid.
///
/// A taken cell has exactly one ship and no buffer set; a buffer cell has no ship and
/// at least one ship in its buffer set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell<I> {
    state: CellState,

    /// The ID of the ship that occupies this cell, if any.
    item: Option<I>,

    /// IDs of the ships whose buffer zone covers this cell. Kept free of duplicates.
    buffer_of: Vec<I>,

    /// Whether this cell has been shot at.
    was_shot: bool,
}

impl<I> Default for Cell<I> {
    fn default() -> Self {
        Self {
            state: CellState::Free,
            item: None,
            buffer_of: Vec::new(),
            was_shot: false,
        }
    }
}

impl<I: ShipId> Cell<I> {
    /// A free cell with nothing in it.
    pub fn free() -> Self {
        Self::default()
    }

    /// A cell occupied by the ship with the given ID.
    pub fn taken(item: I) -> Self {
        Self {
            state: CellState::Taken,
            item: Some(item),
            ..Self::default()
        }
    }

    /// A cell in the buffer zone of the ship with the given ID.
    pub fn buffer(item: I) -> Self {
        Self {
            state: CellState::Buffer,
            buffer_of: vec![item],
            ..Self::default()
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// The ID of the ship occupying this cell, if any.
    pub fn item(&self) -> Option<&I> {
        self.item.as_ref()
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    /// IDs of the ships this cell is a buffer for.
    pub fn buffer_of(&self) -> &[I] {
        &self.buffer_of
    }

    pub fn is_empty_buffer_of(&self) -> bool {
        self.buffer_of.is_empty()
    }

    /// Whether a shot has landed on this cell.
    pub fn was_shot(&self) -> bool {
        self.was_shot
    }

    /// Record that this cell buffers the given ship. Adding the same ship twice has no
    /// effect.
    pub(crate) fn add_to_buffer_of(&mut self, item: I) {
        if !self.buffer_of.contains(&item) {
            self.buffer_of.push(item);
        }
    }

    /// Remove the given ship from the buffer set. Returns true if it was present.
    pub(crate) fn remove_from_buffer_of(&mut self, item: &I) -> bool {
        match self.buffer_of.iter().position(|id| id == item) {
            Some(idx) => {
                self.buffer_of.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark_shot(&mut self) {
        self.was_shot = true;
    }
}

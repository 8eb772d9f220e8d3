//! Value types for a round of fire: the [`Salvo`], its [`Shot`]s and their
//! [`Response`]s.

use crate::{board::Coordinate, ships::Ship};

/// Outcome of a single shot, recorded by the target's grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Response<I> {
    /// Whether the shot found a tracked cell.
    hit: bool,
    /// The ship that occupied the cell, as it was right after the hit.
    item: Option<Ship<I>>,
}

impl<I> Response<I> {
    pub(crate) fn new(hit: bool, item: Option<Ship<I>>) -> Self {
        Self { hit, item }
    }

    /// Whether the shot landed on a tracked cell. Note that buffer cells and previously
    /// shot water count as tracked, so check [`item`][Self::item] for a ship.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// The ship that was struck, if any.
    pub fn item(&self) -> Option<&Ship<I>> {
        self.item.as_ref()
    }
}

/// A single shot at a coordinate of the target's grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Shot<I> {
    coord: Coordinate,
    /// Filled exactly once, when the shot is resolved.
    result: Option<Response<I>>,
}

impl<I> Shot<I> {
    /// Construct an unresolved shot at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            coord: Coordinate::new(row, col),
            result: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn col(&self) -> usize {
        self.coord.col
    }

    /// The outcome of this shot, once resolved.
    pub fn result(&self) -> Option<&Response<I>> {
        self.result.as_ref()
    }

    pub(crate) fn record(&mut self, response: Response<I>) {
        debug_assert!(self.result.is_none(), "shot resolved twice");
        self.result = Some(response);
    }
}

impl<I> From<Coordinate> for Shot<I> {
    fn from(coord: Coordinate) -> Self {
        Self::new(coord.row, coord.col)
    }
}

/// One round's shots, fired by one player at the target.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Salvo<P, I> {
    target: P,
    shots: Vec<Shot<I>>,
}

impl<P, I> Salvo<P, I> {
    pub(crate) fn new(target: P, shots: Vec<Shot<I>>) -> Self {
        Self { target, shots }
    }

    /// The player this salvo was fired at.
    pub fn target(&self) -> &P {
        &self.target
    }

    /// The shots of this salvo, in firing order.
    pub fn shots(&self) -> &[Shot<I>] {
        &self.shots
    }

    pub(crate) fn shots_mut(&mut self) -> &mut [Shot<I>] {
        &mut self.shots
    }

    /// Get an iterator over the ships struck by this salvo that it left destroyed.
    pub fn destroyed(&self) -> impl Iterator<Item = &Ship<I>> {
        self.shots
            .iter()
            .filter_map(|shot| shot.result().and_then(|response| response.item()))
            .filter(|ship| ship.is_destroyed())
    }
}

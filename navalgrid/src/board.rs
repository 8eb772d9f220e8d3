//! Types that make up the game board.

use std::{
    borrow::Borrow,
    collections::{btree_map::Entry, BTreeMap},
};

use log::{debug, trace};

use crate::{
    salvo::{Response, Shot},
    ships::{Orientation, Ship, ShipId},
};

pub use self::{
    cell::{Cell, CellState},
    coordinate::Coordinate,
    errors::{
        CannotPlaceReason, CannotShootReason, GridSizeError, PlaceError, ShotError,
        TakeOffError,
    },
};

mod cell;
mod coordinate;
mod errors;

/// Smallest supported grid size.
pub const MIN_SIZE: usize = 10;
/// Largest supported grid size.
pub const MAX_SIZE: usize = 20;

/// A square board holding one player's ships, or what they know of their opponent's.
///
/// Cells are stored sparsely: a coordinate without a tracked cell is open water that has
/// never been shot.
#[derive(Debug, Clone)]
pub struct Grid<I> {
    /// Length of each side of the grid.
    size: usize,

    /// Tracked cells, ordered row-major.
    cells: BTreeMap<Coordinate, Cell<I>>,

    /// Ships currently placed on the grid, in placement order.
    items: Vec<Ship<I>>,
}

impl<I: ShipId> Grid<I> {
    /// Construct an empty grid. Fails unless `size` is within [`MIN_SIZE`] and
    /// [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridSizeError> {
        if size < MIN_SIZE || size > MAX_SIZE {
            return Err(GridSizeError::new(size));
        }
        Ok(Self {
            size,
            cells: BTreeMap::new(),
            items: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get an iterator over every tracked cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (&Coordinate, &Cell<I>)> {
        self.cells.iter()
    }

    /// Get the cell at the given coordinate, if it is tracked.
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell<I>> {
        self.cells.get(&coord)
    }

    pub fn has_cell(&self, coord: Coordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Ships placed on this grid.
    pub fn items(&self) -> &[Ship<I>] {
        &self.items
    }

    /// Get the placed ship with the specified ID if it exists.
    pub fn item<Q: ?Sized>(&self, id: &Q) -> Option<&Ship<I>>
    where
        I: Borrow<Q>,
        Q: Eq,
    {
        self.items.iter().find(|ship| ship.id().borrow() == id)
    }

    /// Returns true if the ship with the specified ID is placed on this grid.
    pub fn contains<Q: ?Sized>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Eq,
    {
        self.item(id).is_some()
    }

    /// Returns true if every cell of the ship's footprint lies inside the grid.
    pub fn will_object_fit(&self, ship: &Ship<I>) -> bool {
        let (along, across) = match ship.orientation() {
            Orientation::Horizontal => (ship.col(), ship.row()),
            Orientation::Vertical => (ship.row(), ship.col()),
        };
        across < self.size
            && along
                .checked_add(ship.size())
                .map_or(false, |end| end <= self.size)
    }

    /// Returns true if any cell of the ship's footprint is taken or in a buffer zone.
    pub fn will_object_collide(&self, ship: &Ship<I>) -> bool {
        ship.footprint().any(|coord| {
            self.cells
                .get(&coord)
                .map_or(false, |cell| cell.state() != CellState::Free)
        })
    }

    /// Check whether the ship could be placed, without placing it.
    pub fn check_placement(&self, ship: &Ship<I>) -> Result<(), CannotPlaceReason> {
        if self.contains(ship.id()) {
            Err(CannotPlaceReason::AlreadyPlaced)
        } else if !self.will_object_fit(ship) {
            Err(CannotPlaceReason::DoesNotFit)
        } else if self.will_object_collide(ship) {
            Err(CannotPlaceReason::Collides)
        } else {
            Ok(())
        }
    }

    /// Place the ship on the grid, taking its footprint and marking the buffer zone
    /// around it. If the ship doesn't fit or collides, the grid is unchanged and the ship
    /// is handed back inside the error.
    pub fn put_item(&mut self, ship: Ship<I>) -> Result<(), PlaceError<I>> {
        if let Err(reason) = self.check_placement(&ship) {
            debug!("rejected placement of {:?}: {}", ship.id(), reason);
            return Err(PlaceError::new(reason, ship));
        }

        let id = ship.id().clone();
        for coord in ship.footprint() {
            self.cells.insert(coord, Cell::taken(id.clone()));
            for neighbour in buffer_zone(self.size, coord) {
                match self.cells.get_mut(&neighbour) {
                    None => {
                        trace!("{} buffers {:?}", neighbour, id);
                        self.cells.insert(neighbour, Cell::buffer(id.clone()));
                    }
                    Some(cell) if cell.state() == CellState::Buffer => {
                        trace!("{} also buffers {:?}", neighbour, id);
                        cell.add_to_buffer_of(id.clone());
                    }
                    Some(_) => {}
                }
            }
        }
        debug!(
            "placed {} {:?} at {} {:?}",
            ship.kind(),
            id,
            ship.offset(),
            ship.orientation()
        );
        self.items.push(ship);
        Ok(())
    }

    /// Remove the ship with the given ID from the grid, freeing its footprint and any
    /// buffer cells no other ship still needs. Returns the removed ship.
    pub fn take_off_item(&mut self, id: &I) -> Result<Ship<I>, TakeOffError<I>> {
        let index = match self.items.iter().position(|ship| ship.id() == id) {
            Some(index) => index,
            None => return Err(TakeOffError::new(id.clone())),
        };
        let ship = self.items.remove(index);

        for coord in ship.footprint() {
            self.cells.remove(&coord);
            for neighbour in buffer_zone(self.size, coord) {
                if let Entry::Occupied(mut entry) = self.cells.entry(neighbour) {
                    if entry.get().state() != CellState::Buffer {
                        continue;
                    }
                    entry.get_mut().remove_from_buffer_of(id);
                    if entry.get().is_empty_buffer_of() {
                        trace!("{} freed", neighbour);
                        entry.remove();
                    }
                }
            }
        }
        debug!("took {} {:?} off the grid", ship.kind(), id);
        Ok(ship)
    }

    /// Check that the shot can be resolved against this grid.
    ///
    /// Rows and columns up to and including `size` are accepted, since buffer zones along
    /// the bottom and right edges are recorded one cell beyond the last playable cell.
    pub fn check_shot(&self, shot: &Shot<I>) -> Result<(), ShotError> {
        let coord = shot.coordinate();
        if coord.row > self.size || coord.col > self.size {
            Err(ShotError::new(CannotShootReason::OutOfBounds, coord))
        } else if shot.result().is_some() {
            Err(ShotError::new(CannotShootReason::AlreadyResolved, coord))
        } else {
            Ok(())
        }
    }

    /// Resolve an incoming shot and record the [`Response`] on it.
    ///
    /// The response reports a hit whenever a tracked cell exists at the coordinate. That
    /// includes buffer cells and cells that were already shot, so a second shot on open
    /// water also reports a hit, without a ship.
    pub fn receive_shot(&mut self, shot: &mut Shot<I>) -> Result<(), ShotError> {
        self.check_shot(shot)?;
        self.apply_shot(shot);
        Ok(())
    }

    /// Resolve a shot that already passed [`check_shot`][Self::check_shot].
    pub(crate) fn apply_shot(&mut self, shot: &mut Shot<I>) {
        let coord = shot.coordinate();
        let (hit, struck) = match self.cells.get_mut(&coord) {
            Some(cell) => {
                cell.mark_shot();
                (true, cell.item().cloned())
            }
            None => {
                let mut cell = Cell::free();
                cell.mark_shot();
                self.cells.insert(coord, cell);
                (false, None)
            }
        };

        let item = struck.and_then(|id| {
            self.items
                .iter_mut()
                .find(|ship| ship.id() == &id)
                .map(|ship| {
                    let state = ship.take_hit();
                    trace!("{:?} hit at {}, now {:?}", id, coord, state);
                    ship.clone()
                })
        });
        trace!("shot at {}: hit={}", coord, hit);
        shot.record(Response::new(hit, item));
    }
}

/// Compute the inclusive range of rows (or columns) around `position` that make up its
/// buffer zone.
///
/// The lower bound steps inward to `position + 1` at the top/left edge instead of being
/// dropped, and the upper bound only steps inward once `position + 1` exceeds `size`.
fn buffer_bounds(size: usize, position: usize) -> (usize, usize) {
    let lower = match position.checked_sub(1) {
        Some(lower) => lower,
        None => position + 1,
    };
    let upper = if position + 1 <= size {
        position + 1
    } else {
        position.saturating_sub(1)
    };
    (lower.min(upper), lower.max(upper))
}

/// Get an iterator over the clamped 3x3 block around `coord`, including `coord`.
fn buffer_zone(size: usize, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
    let (row_lo, row_hi) = buffer_bounds(size, coord.row);
    let (col_lo, col_hi) = buffer_bounds(size, coord.col);
    (row_lo..=row_hi).flat_map(move |row| (col_lo..=col_hi).map(move |col| Coordinate::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::{DamageState, ShipKind};

    fn destroyer(id: u32, orientation: Orientation, row: usize, col: usize) -> Ship<u32> {
        Ship::new(id, ShipKind::Destroyer, orientation, row, col)
    }

    fn snapshot(grid: &Grid<u32>) -> Vec<(Coordinate, Cell<u32>)> {
        grid.cells().map(|(c, cell)| (*c, cell.clone())).collect()
    }

    #[test]
    fn size_is_validated() {
        assert_eq!(Grid::<u32>::new(MAX_SIZE - 1).unwrap().size(), 19);
        assert_eq!(Grid::<u32>::new(MAX_SIZE + 1).unwrap_err().size(), 21);
        assert!(Grid::<u32>::new(MIN_SIZE - 1).is_err());
        assert!(Grid::<u32>::new(MIN_SIZE).is_ok());
    }

    #[test]
    fn buffer_bounds_clamp_at_edges() {
        assert_eq!(buffer_bounds(10, 0), (1, 1));
        assert_eq!(buffer_bounds(10, 1), (0, 2));
        assert_eq!(buffer_bounds(10, 9), (8, 10));
        assert_eq!(buffer_bounds(10, 10), (9, 9));
        assert_eq!(buffer_bounds(10, 11), (10, 10));
    }

    #[test]
    fn buffer_reaches_past_far_edge_but_not_near_edge() {
        let mut grid = Grid::new(MIN_SIZE).unwrap();
        grid.put_item(Ship::new(1, ShipKind::Submarine, Orientation::Vertical, 9, 9))
            .unwrap();
        let far: Vec<_> = grid
            .cells()
            .filter(|(_, cell)| cell.state() == CellState::Buffer)
            .map(|(coord, _)| *coord)
            .collect();
        assert_eq!(far.len(), 8);
        assert!(far.contains(&Coordinate::new(10, 10)));
        assert!(far.contains(&Coordinate::new(MIN_SIZE, 9)));

        grid.put_item(Ship::new(2, ShipKind::Submarine, Orientation::Vertical, 0, 0))
            .unwrap();
        assert_eq!(grid.cell(Coordinate::new(1, 1)), Some(&Cell::buffer(2)));
        assert!(!grid.has_cell(Coordinate::new(0, 1)));
        assert!(!grid.has_cell(Coordinate::new(1, 0)));
        assert_eq!(grid.cells().count(), 9 + 2);
    }

    #[test]
    fn collide_check_handles_huge_offsets() {
        let mut grid = Grid::new(MIN_SIZE).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 0, 0)).unwrap();

        let far_right = destroyer(2, Orientation::Horizontal, 0, usize::max_value());
        assert!(!grid.will_object_fit(&far_right));
        assert!(!grid.will_object_collide(&far_right));
        assert_eq!(
            grid.check_placement(&far_right),
            Err(CannotPlaceReason::DoesNotFit)
        );

        let far_down = destroyer(3, Orientation::Vertical, usize::max_value(), 0);
        assert!(!grid.will_object_collide(&far_down));
        assert_eq!(
            grid.put_item(far_down).unwrap_err().reason(),
            CannotPlaceReason::DoesNotFit
        );
    }

    #[test]
    fn single_cell_ship_is_surrounded_by_buffer() {
        let mut grid = Grid::new(19).unwrap();
        grid.put_item(Ship::new(7, ShipKind::Submarine, Orientation::Vertical, 1, 1))
            .unwrap();
        assert_eq!(grid.items().len(), 1);
        assert_eq!(grid.cells().count(), 9);
        for (coord, cell) in grid.cells() {
            if *coord == Coordinate::new(1, 1) {
                assert_eq!(cell, &Cell::taken(7));
            } else {
                assert_eq!(cell, &Cell::buffer(7));
            }
        }
    }

    #[test]
    fn will_object_fit() {
        let grid = Grid::<u32>::new(19).unwrap();
        let size = grid.size();

        // Flush against the right edge.
        assert!(grid.will_object_fit(&destroyer(1, Orientation::Horizontal, 1, size - 2)));
        assert!(!grid.will_object_fit(&destroyer(1, Orientation::Horizontal, 1, size - 1)));

        // Flush against the bottom edge.
        assert!(grid.will_object_fit(&destroyer(1, Orientation::Vertical, size - 2, 1)));
        assert!(!grid.will_object_fit(&destroyer(1, Orientation::Vertical, size - 1, 1)));

        // Entirely outside the grid, along either axis.
        assert!(!grid.will_object_fit(&destroyer(1, Orientation::Vertical, size + 99, size + 99)));
        assert!(!grid.will_object_fit(&destroyer(1, Orientation::Horizontal, size, 0)));
        assert!(!grid.will_object_fit(&destroyer(1, Orientation::Horizontal, 0, usize::max_value())));
    }

    #[test]
    fn will_object_collide() {
        let mut grid = Grid::new(19).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 1, 2)).unwrap();

        // Directly on the ship.
        assert!(grid.will_object_collide(&destroyer(2, Orientation::Horizontal, 1, 3)));
        // Buffer top.
        assert!(grid.will_object_collide(&destroyer(2, Orientation::Horizontal, 0, 2)));
        // Buffer right.
        assert!(grid.will_object_collide(&destroyer(2, Orientation::Vertical, 0, 4)));
        // Buffer bottom.
        assert!(grid.will_object_collide(&destroyer(2, Orientation::Horizontal, 2, 2)));
        // Buffer left.
        assert!(grid.will_object_collide(&destroyer(2, Orientation::Vertical, 0, 1)));
        // Clear of the buffer zone.
        assert!(!grid.will_object_collide(&destroyer(2, Orientation::Horizontal, 3, 2)));
    }

    #[test]
    fn put_item_marks_footprint_and_buffer() {
        let mut grid = Grid::new(15).unwrap();
        grid.put_item(Ship::new(1, ShipKind::Battleship, Orientation::Horizontal, 1, 2))
            .unwrap();

        for row in 0..15 {
            for col in 0..15 {
                let coord = Coordinate::new(row, col);
                let state = grid.cell(coord).map(|cell| cell.state());
                if row == 1 && (2..=5).contains(&col) {
                    assert_eq!(state, Some(CellState::Taken), "{}", coord);
                    assert_eq!(grid.cell(coord).unwrap().item(), Some(&1));
                } else if row <= 2 && (1..=6).contains(&col) {
                    assert_eq!(state, Some(CellState::Buffer), "{}", coord);
                    assert_eq!(grid.cell(coord).unwrap().buffer_of(), &[1]);
                } else {
                    assert_eq!(state, None, "{}", coord);
                }
            }
        }
    }

    #[test]
    fn top_edge_buffer_skips_own_row() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(Ship::new(1, ShipKind::Submarine, Orientation::Horizontal, 0, 0))
            .unwrap();
        let tracked: Vec<_> = grid.cells().map(|(c, _)| *c).collect();
        assert_eq!(tracked, vec![Coordinate::new(0, 0), Coordinate::new(1, 1)]);
        // The clamped buffer leaves the neighbouring cell on row 0 free.
        grid.put_item(Ship::new(2, ShipKind::Submarine, Orientation::Horizontal, 0, 1))
            .unwrap();
    }

    #[test]
    fn bottom_right_buffer_extends_past_last_cell() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(Ship::new(1, ShipKind::Submarine, Orientation::Horizontal, 9, 9))
            .unwrap();
        assert!(grid.has_cell(Coordinate::new(10, 10)));
        assert!(grid.has_cell(Coordinate::new(8, 8)));
        assert_eq!(grid.cells().count(), 9);
    }

    #[test]
    fn rejected_placement_leaves_grid_unchanged() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 4, 4)).unwrap();
        let before = snapshot(&grid);

        let err = grid.put_item(destroyer(2, Orientation::Vertical, 3, 5)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Collides);
        assert_eq!(err.into_ship().id(), &2);

        let err = grid.put_item(destroyer(3, Orientation::Vertical, 9, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::DoesNotFit);

        let err = grid.put_item(destroyer(1, Orientation::Vertical, 0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyPlaced);

        assert_eq!(snapshot(&grid), before);
        assert_eq!(grid.items().len(), 1);
    }

    #[test]
    fn take_off_restores_previous_cells() {
        let mut grid = Grid::new(12).unwrap();
        grid.put_item(destroyer(1, Orientation::Vertical, 0, 0)).unwrap();
        let before = snapshot(&grid);

        grid.put_item(destroyer(2, Orientation::Horizontal, 5, 5)).unwrap();
        let removed = grid.take_off_item(&2).unwrap();
        assert_eq!(removed.id(), &2);
        assert_eq!(snapshot(&grid), before);

        grid.take_off_item(&1).unwrap();
        assert_eq!(grid.cells().count(), 0);
        assert!(grid.items().is_empty());
    }

    #[test]
    fn take_off_keeps_shared_buffer() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 2, 2)).unwrap();
        grid.put_item(destroyer(2, Orientation::Horizontal, 4, 2)).unwrap();
        let shared = Coordinate::new(3, 3);
        assert_eq!(grid.cell(shared).unwrap().buffer_of(), &[1, 2]);

        grid.take_off_item(&1).unwrap();
        assert_eq!(grid.cell(shared).unwrap().buffer_of(), &[2]);
        assert!(!grid.has_cell(Coordinate::new(1, 2)));
        assert!(!grid.has_cell(Coordinate::new(2, 2)));
    }

    #[test]
    fn take_off_unknown_item_fails() {
        let mut grid = Grid::<u32>::new(10).unwrap();
        assert_eq!(grid.take_off_item(&4).unwrap_err().into_id(), 4);
    }

    #[test]
    fn shot_damages_and_destroys() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 0, 0)).unwrap();

        let mut first = Shot::new(0, 0);
        grid.receive_shot(&mut first).unwrap();
        let response = first.result().unwrap();
        assert!(response.is_hit());
        assert_eq!(response.item().unwrap().state(), DamageState::Damaged);
        assert!(grid.cell(Coordinate::new(0, 0)).unwrap().was_shot());

        let mut second = Shot::new(0, 1);
        grid.receive_shot(&mut second).unwrap();
        assert_eq!(second.result().unwrap().item().unwrap().state(), DamageState::Destroyed);
        assert_eq!(grid.item(&1).unwrap().health(), 0);
    }

    #[test]
    fn shot_on_open_water_is_tracked() {
        let mut grid = Grid::<u32>::new(10).unwrap();
        let mut shot = Shot::new(5, 5);
        grid.receive_shot(&mut shot).unwrap();
        assert!(!shot.result().unwrap().is_hit());
        let cell = grid.cell(Coordinate::new(5, 5)).unwrap();
        assert!(cell.was_shot());
        assert_eq!(cell.state(), CellState::Free);

        // A repeat shot finds the tracked cell and reports a hit without a ship.
        let mut again = Shot::new(5, 5);
        grid.receive_shot(&mut again).unwrap();
        assert!(again.result().unwrap().is_hit());
        assert!(again.result().unwrap().item().is_none());
    }

    #[test]
    fn shot_on_buffer_reports_hit_without_ship() {
        let mut grid = Grid::new(10).unwrap();
        grid.put_item(destroyer(1, Orientation::Horizontal, 3, 3)).unwrap();
        let mut shot = Shot::new(2, 3);
        grid.receive_shot(&mut shot).unwrap();
        assert!(shot.result().unwrap().is_hit());
        assert!(shot.result().unwrap().item().is_none());
        assert_eq!(grid.item(&1).unwrap().state(), DamageState::Undamaged);
    }

    #[test]
    fn shot_validation() {
        let mut grid = Grid::<u32>::new(10).unwrap();
        let mut far = Shot::new(11, 0);
        assert_eq!(
            grid.receive_shot(&mut far).unwrap_err().reason(),
            CannotShootReason::OutOfBounds
        );
        assert!(far.result().is_none());
        assert_eq!(grid.cells().count(), 0);

        let mut edge = Shot::new(10, 10);
        grid.receive_shot(&mut edge).unwrap();
        assert_eq!(
            grid.receive_shot(&mut edge).unwrap_err().reason(),
            CannotShootReason::AlreadyResolved
        );
    }
}

//! A participant of a [`Game`][crate::game::Game], with their grids and fleets.

use std::{fmt::Debug, hash::Hash};

use enumflags2::BitFlags;
use log::debug;

use crate::{
    board::Grid,
    fleet::ShipsFleet,
    ships::{Ship, ShipId},
};

pub use self::errors::{CannotPutReason, CannotTakeOffReason, PutShipError, TakeOffShipError};
#[cfg(feature = "rng_gen")]
pub use self::errors::DeployError;

mod errors;
#[cfg(feature = "rng_gen")]
mod random;

/// Types used for the ID of a player. Ids may be cloned arbitrarily so they should be
/// cheap to clone.
pub trait PlayerId: Debug + Clone + Eq + Hash {}
impl<T: Debug + Clone + Eq + Hash> PlayerId for T {}

/// Whose side of the ocean a grid or fleet describes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Role {
    /// The player's own ships.
    Mine,
    /// What the player knows about their opponent.
    Theirs,
}

/// Parts a player needs attached before placing ships or being fired at.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Component {
    /// The player's own grid.
    Grid = 0b01,
    /// The player's own fleet.
    Fleet = 0b10,
}

/// One value per [`Role`], either of which may be absent.
#[derive(Debug, Clone)]
struct ByRole<T> {
    mine: Option<T>,
    theirs: Option<T>,
}

impl<T> ByRole<T> {
    fn get(&self, role: Role) -> Option<&T> {
        match role {
            Role::Mine => self.mine.as_ref(),
            Role::Theirs => self.theirs.as_ref(),
        }
    }

    fn get_mut(&mut self, role: Role) -> Option<&mut T> {
        match role {
            Role::Mine => self.mine.as_mut(),
            Role::Theirs => self.theirs.as_mut(),
        }
    }

    fn set(&mut self, role: Role, value: T) -> Option<T> {
        match role {
            Role::Mine => self.mine.replace(value),
            Role::Theirs => self.theirs.replace(value),
        }
    }
}

impl<T> Default for ByRole<T> {
    fn default() -> Self {
        Self {
            mine: None,
            theirs: None,
        }
    }
}

/// A player, owning a grid and a fleet for each [`Role`]. Grids and fleets are attached
/// after construction.
#[derive(Debug, Clone)]
pub struct Player<P, I> {
    id: P,
    grids: ByRole<Grid<I>>,
    fleets: ByRole<ShipsFleet<I>>,
}

impl<P: PlayerId, I: ShipId> Player<P, I> {
    /// Construct a player with no grids or fleets attached.
    pub fn new(id: P) -> Self {
        Self {
            id,
            grids: ByRole::default(),
            fleets: ByRole::default(),
        }
    }

    pub fn id(&self) -> &P {
        &self.id
    }

    /// Attach a grid for the given role, returning the grid it replaced.
    pub fn set_grid(&mut self, role: Role, grid: Grid<I>) -> Option<Grid<I>> {
        self.grids.set(role, grid)
    }

    pub fn grid(&self, role: Role) -> Option<&Grid<I>> {
        self.grids.get(role)
    }

    pub fn grid_mut(&mut self, role: Role) -> Option<&mut Grid<I>> {
        self.grids.get_mut(role)
    }

    /// Attach a fleet for the given role, returning the fleet it replaced.
    pub fn set_fleet(&mut self, role: Role, fleet: ShipsFleet<I>) -> Option<ShipsFleet<I>> {
        self.fleets.set(role, fleet)
    }

    pub fn fleet(&self, role: Role) -> Option<&ShipsFleet<I>> {
        self.fleets.get(role)
    }

    pub fn fleet_mut(&mut self, role: Role) -> Option<&mut ShipsFleet<I>> {
        self.fleets.get_mut(role)
    }

    /// Which of the player's own grid and fleet are not attached.
    pub fn missing(&self) -> BitFlags<Component> {
        let mut missing = BitFlags::empty();
        if self.grids.mine.is_none() {
            missing.insert(Component::Grid);
        }
        if self.fleets.mine.is_none() {
            missing.insert(Component::Fleet);
        }
        missing
    }

    /// Call the ship up from the player's own fleet and place it on their own grid.
    ///
    /// Either both happen or neither does: the placement is checked before the fleet is
    /// touched.
    pub fn put_ship(&mut self, ship: Ship<I>) -> Result<(), PutShipError<I>> {
        let missing = self.missing();
        let (grid, fleet) = match (self.grids.mine.as_mut(), self.fleets.mine.as_mut()) {
            (Some(grid), Some(fleet)) => (grid, fleet),
            _ => return Err(PutShipError::new(CannotPutReason::Missing(missing), ship)),
        };

        if let Err(reason) = grid.check_placement(&ship) {
            return Err(PutShipError::new(CannotPutReason::Place(reason), ship));
        }
        if let Err(err) = fleet.call_up_ship(&ship) {
            return Err(PutShipError::new(CannotPutReason::CallUp(err.reason()), ship));
        }
        grid.put_item(ship).map_err(|err| {
            // Placement was checked above; undo the call up so the fleet matches the grid.
            if let Err(rollback) = fleet.call_off_ship(err.ship()) {
                debug!("could not undo call up: {}", rollback);
            }
            let reason = CannotPutReason::Place(err.reason());
            PutShipError::new(reason, err.into_ship())
        })
    }

    /// Call the ship with the given ID off from the player's own fleet and take it off
    /// their own grid, returning it.
    pub fn take_off_ship(&mut self, id: &I) -> Result<Ship<I>, TakeOffShipError<I>> {
        let missing = self.missing();
        let (grid, fleet) = match (self.grids.mine.as_mut(), self.fleets.mine.as_mut()) {
            (Some(grid), Some(fleet)) => (grid, fleet),
            _ => {
                return Err(TakeOffShipError::new(
                    CannotTakeOffReason::Missing(missing),
                    id.clone(),
                ))
            }
        };

        let ship = match grid.item(id) {
            Some(ship) => ship,
            None => {
                return Err(TakeOffShipError::new(
                    CannotTakeOffReason::NotPlaced,
                    id.clone(),
                ))
            }
        };
        if let Err(err) = fleet.call_off_ship(ship) {
            return Err(TakeOffShipError::new(
                CannotTakeOffReason::CallOff(err.reason()),
                id.clone(),
            ));
        }
        grid.take_off_item(id)
            .map_err(|err| TakeOffShipError::new(CannotTakeOffReason::NotPlaced, err.into_id()))
    }
}

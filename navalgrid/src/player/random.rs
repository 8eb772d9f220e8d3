//! Random deployment of a player's remaining fleet.

use log::debug;
use rand::Rng;

use crate::{
    player::{CannotPutReason, DeployError, Player, PlayerId},
    ships::{Orientation, Ship, ShipId, ShipKind},
};

/// Number of random positions tried for each ship before giving up.
const MAX_ATTEMPTS: usize = 100;

impl<P: PlayerId, I: ShipId> Player<P, I> {
    /// Put every ship kind still available in the player's own fleet on their own grid at
    /// a random valid position, creating each ship with an ID from `next_id`. Returns the
    /// number of ships deployed.
    ///
    /// Each placement follows the same rules as [`put_ship`][Self::put_ship]. If no
    /// position is found for a ship, ships deployed so far stay deployed.
    pub fn deploy_randomly<R, F>(&mut self, rng: &mut R, mut next_id: F) -> Result<usize, DeployError>
    where
        R: Rng,
        F: FnMut(ShipKind) -> I,
    {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(DeployError::Missing(missing));
        }
        let size = self.grids.mine.as_ref().map_or(0, |grid| grid.size());

        let mut deployed = 0;
        while let Some(kind) = self
            .fleets
            .mine
            .as_ref()
            .and_then(|fleet| fleet.available().first().copied())
        {
            let mut ship = Ship::new(next_id(kind), kind, Orientation::Horizontal, 0, 0);
            let mut attempts = 0;
            loop {
                if attempts == MAX_ATTEMPTS || kind.size() > size {
                    debug!("gave up placing {} after {} attempts", kind, attempts);
                    return Err(DeployError::UnableToPlace(kind));
                }
                attempts += 1;

                let orientation = if rng.gen() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_row, max_col) = match orientation {
                    Orientation::Horizontal => (size - 1, size - kind.size()),
                    Orientation::Vertical => (size - kind.size(), size - 1),
                };
                ship.set_orientation(orientation);
                ship.set_position(rng.gen_range(0, max_row + 1), rng.gen_range(0, max_col + 1));

                match self.put_ship(ship) {
                    Ok(()) => break,
                    Err(err) => match err.reason() {
                        CannotPutReason::Place(_) => ship = err.into_ship(),
                        _ => return Err(DeployError::UnableToPlace(kind)),
                    },
                }
            }
            deployed += 1;
        }
        Ok(deployed)
    }
}

//! Per-player inventory of ships waiting in port and ships deployed on the board.

use std::borrow::Borrow;

use log::debug;

use crate::ships::{Ship, ShipId, ShipKind};

pub use self::errors::{
    CallOffError, CallUpError, CannotCallOffReason, CannotCallUpReason, EmptyFleetError,
};

mod errors;

/// Tracks which ship kinds a player may still deploy and which ships are deployed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShipsFleet<I> {
    /// Deployed ships, in the order they were called up.
    ships: Vec<(I, ShipKind)>,

    /// Kinds still waiting to be deployed. Kinds may repeat.
    available: Vec<ShipKind>,

    /// The inventory the fleet started with.
    initial: Vec<ShipKind>,
}

impl<I: ShipId> ShipsFleet<I> {
    /// Construct a fleet with the given inventory of ship kinds. Fails if the inventory
    /// is empty.
    pub fn new(available: Vec<ShipKind>) -> Result<Self, EmptyFleetError> {
        if available.is_empty() {
            return Err(EmptyFleetError);
        }
        Ok(Self {
            ships: Vec::new(),
            initial: available.clone(),
            available,
        })
    }

    /// Get an iterator over the deployed ships' IDs and kinds.
    pub fn ships(&self) -> impl Iterator<Item = (&I, ShipKind)> {
        self.ships.iter().map(|(id, kind)| (id, *kind))
    }

    /// Kinds still available to deploy.
    pub fn available(&self) -> &[ShipKind] {
        &self.available
    }

    /// The inventory this fleet started with.
    pub fn initial(&self) -> &[ShipKind] {
        &self.initial
    }

    /// Returns true if any ship kind is still waiting to be deployed.
    pub fn any_available_ships(&self) -> bool {
        !self.available.is_empty()
    }

    /// Returns true if the ship with the given ID is deployed.
    pub fn is_deployed<Q: ?Sized>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Eq,
    {
        self.position(id).is_some()
    }

    /// Check whether the ship could be called up, without calling it up.
    pub fn check_call_up(&self, ship: &Ship<I>) -> Result<(), CannotCallUpReason> {
        if self.is_deployed(ship.id()) {
            Err(CannotCallUpReason::AlreadyDeployed)
        } else if !self.available.contains(&ship.kind()) {
            Err(CannotCallUpReason::Unavailable)
        } else {
            Ok(())
        }
    }

    /// Deploy the ship, taking one of its kind out of the available inventory.
    pub fn call_up_ship(&mut self, ship: &Ship<I>) -> Result<(), CallUpError<I>> {
        let kind = ship.kind();
        if let Err(reason) = self.check_call_up(ship) {
            debug!("cannot call up {} {:?}: {}", kind, ship.id(), reason);
            return Err(CallUpError::new(reason, ship.id().clone(), kind));
        }
        if let Some(idx) = self.available.iter().position(|k| *k == kind) {
            self.available.remove(idx);
        }
        self.ships.push((ship.id().clone(), kind));
        debug!("called up {} {:?}", kind, ship.id());
        Ok(())
    }

    /// Withdraw a deployed ship, returning its kind to the available inventory.
    ///
    /// Only succeeds if a ship of this kind has left the inventory and this exact ship
    /// is among the deployed ships.
    pub fn call_off_ship(&mut self, ship: &Ship<I>) -> Result<(), CallOffError<I>> {
        let kind = ship.kind();
        let reason = if !self.was_called_up(kind) {
            CannotCallOffReason::NeverCalledUp
        } else if let Some(idx) = self.position(ship.id()) {
            self.ships.remove(idx);
            self.available.push(kind);
            debug!("called off {} {:?}", kind, ship.id());
            return Ok(());
        } else {
            CannotCallOffReason::NotDeployed
        };
        debug!("cannot call off {} {:?}: {}", kind, ship.id(), reason);
        Err(CallOffError::new(reason, ship.id().clone(), kind))
    }

    /// Drop a destroyed ship from the deployed ships for good. Its kind does not return
    /// to the available inventory. Returns true if the ship was deployed.
    pub fn remove_from_ships<Q: ?Sized>(&mut self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Eq,
    {
        match self.position(id) {
            Some(idx) => {
                self.ships.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether some ship of the given kind has left the available inventory, comparing
    /// the initial inventory to the current one.
    fn was_called_up(&self, kind: ShipKind) -> bool {
        let count = |kinds: &[ShipKind]| kinds.iter().filter(|k| **k == kind).count();
        count(&self.initial) > count(&self.available)
    }

    fn position<Q: ?Sized>(&self, id: &Q) -> Option<usize>
    where
        I: Borrow<Q>,
        Q: Eq,
    {
        self.ships.iter().position(|(ship, _)| ship.borrow() == id)
    }
}

impl<I: ShipId> Default for ShipsFleet<I> {
    /// Construct a fleet with [`ShipKind::STANDARD_FLEET`].
    fn default() -> Self {
        Self {
            ships: Vec::new(),
            available: ShipKind::STANDARD_FLEET.to_vec(),
            initial: ShipKind::STANDARD_FLEET.to_vec(),
        }
    }
}

//! A game between two players taking turns firing salvos at each other.
//!
//! Turn order is not stored separately: it is read back from the history of salvos, and
//! a salvo may never target the player that the previous salvo targeted.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use log::debug;

use crate::{
    board::{Grid, GridSizeError},
    player::{Player, PlayerId, Role},
    salvo::{Salvo, Shot},
    ships::ShipId,
};

pub use self::{
    errors::{CannotFireReason, SalvoError},
    options::{GameOptions, OptionError, OptionKey, UnknownOptionError, OPTION_PATTERN},
};

mod errors;
mod options;

/// Number of players a game holds.
pub const MAX_PLAYERS: usize = 2;

/// Handles gameplay.
#[derive(Debug, Clone)]
pub struct Game<P, I> {
    /// Identity of this game.
    id: String,

    options: GameOptions,

    /// Players indexed by ID.
    players: HashMap<P, Player<P, I>>,

    /// Player IDs in the order they joined.
    roster: Vec<P>,

    /// Every salvo fired so far, oldest first.
    history: Vec<Salvo<P, I>>,
}

impl<P: PlayerId, I: ShipId> Game<P, I> {
    /// Construct a game with no players.
    pub fn new<S: Into<String>>(id: S, options: GameOptions) -> Self {
        Self {
            id: id.into(),
            options,
            players: HashMap::new(),
            roster: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Get the value of the given option.
    pub fn option(&self, key: OptionKey) -> usize {
        self.options.get(key)
    }

    /// Change an option of this game.
    pub fn set_option(&mut self, key: OptionKey, value: usize) -> Result<(), OptionError> {
        self.options.set(key, value)
    }

    /// Construct an empty grid sized by the grid-size option.
    pub fn new_grid(&self) -> Result<Grid<I>, GridSizeError> {
        Grid::new(self.options.grid_size())
    }

    /// Add a player with the given ID. Returns false, without changing the game, if the
    /// game is full or the ID is already taken.
    pub fn add_player(&mut self, pid: P) -> bool {
        if self.is_full() || self.players.contains_key(&pid) {
            return false;
        }
        debug!("game {}: player {:?} joined", self.id, pid);
        self.roster.push(pid.clone());
        self.players.insert(pid.clone(), Player::new(pid));
        true
    }

    /// Remove the player with the given ID. Returns true if the player was present.
    pub fn remove_player<Q: ?Sized>(&mut self, pid: &Q) -> bool
    where
        P: Borrow<Q>,
        Q: Eq + Hash,
    {
        match self.players.remove(pid) {
            Some(player) => {
                self.roster.retain(|p| p.borrow() != pid);
                debug!("game {}: player {:?} left", self.id, player.id());
                true
            }
            None => false,
        }
    }

    /// Remove all players.
    pub fn flush_players(&mut self) {
        self.players.clear();
        self.roster.clear();
    }

    /// Get the player with the specified ID.
    pub fn player<Q: ?Sized>(&self, pid: &Q) -> Option<&Player<P, I>>
    where
        P: Borrow<Q>,
        Q: Eq + Hash,
    {
        self.players.get(pid)
    }

    /// Mutably get the player with the specified ID.
    pub fn player_mut<Q: ?Sized>(&mut self, pid: &Q) -> Option<&mut Player<P, I>>
    where
        P: Borrow<Q>,
        Q: Eq + Hash,
    {
        self.players.get_mut(pid)
    }

    /// Get an iterator over the players in the order they joined.
    pub fn players(&self) -> impl Iterator<Item = &Player<P, I>> {
        let players = &self.players;
        self.roster.iter().filter_map(move |pid| players.get(pid))
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    pub fn is_full(&self) -> bool {
        self.count_players() == MAX_PLAYERS
    }

    /// Every salvo fired so far, oldest first.
    pub fn history(&self) -> &[Salvo<P, I>] {
        &self.history
    }

    /// The target of the most recent salvo, if any was fired.
    pub fn last_target(&self) -> Option<&P> {
        self.history.last().map(|salvo| salvo.target())
    }

    /// Fire a salvo at the target player's own grid.
    ///
    /// The salvo is rejected without any effect if the previous salvo had the same
    /// target, if it doesn't have exactly the configured number of shots, or if any shot
    /// can't be resolved. Otherwise every shot is resolved in order, ships it destroys
    /// are removed from the target's own fleet, and the salvo is appended to the history.
    pub fn discharge_salvo(
        &mut self,
        target: P,
        shots: Vec<Shot<I>>,
    ) -> Result<&Salvo<P, I>, SalvoError<P>> {
        if self.last_target() == Some(&target) {
            return Err(SalvoError::new(CannotFireReason::ConsecutiveTarget, target));
        }
        let expected = self.options.shots_per_round();
        if shots.len() != expected {
            let reason = CannotFireReason::ShotCount {
                expected,
                actual: shots.len(),
            };
            return Err(SalvoError::new(reason, target));
        }
        let shooter = match self.roster.iter().find(|pid| **pid != target) {
            Some(shooter) => shooter.clone(),
            None if self.players.contains_key(&target) => {
                return Err(SalvoError::new(CannotFireReason::MissingOpponent, target))
            }
            None => return Err(SalvoError::new(CannotFireReason::UnknownTarget, target)),
        };

        let player = match self.players.get_mut(&target) {
            Some(player) => player,
            None => return Err(SalvoError::new(CannotFireReason::UnknownTarget, target)),
        };
        let missing = player.missing();
        if !missing.is_empty() {
            return Err(SalvoError::new(CannotFireReason::Missing(missing), target));
        }
        let grid = match player.grid_mut(Role::Mine) {
            Some(grid) => grid,
            None => return Err(SalvoError::new(CannotFireReason::Missing(missing), target)),
        };
        for shot in &shots {
            if let Err(err) = grid.check_shot(shot) {
                return Err(SalvoError::new(CannotFireReason::Shot(err.reason()), target));
            }
        }

        debug!(
            "game {}: {:?} fires {} shots at {:?}",
            self.id,
            shooter,
            shots.len(),
            target
        );
        let mut salvo = Salvo::new(target, shots);
        for shot in salvo.shots_mut() {
            grid.apply_shot(shot);
        }
        if let Some(fleet) = player.fleet_mut(Role::Mine) {
            for ship in salvo.destroyed() {
                if fleet.remove_from_ships(ship.id()) {
                    debug!("game {}: {:?} destroyed", self.id, ship.id());
                }
            }
        }

        self.history.push(salvo);
        Ok(&self.history[self.history.len() - 1])
    }
}

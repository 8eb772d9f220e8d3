//! Rules engine for a two-player salvo variant of Battleship.
//!
//! The crate covers four pieces that work together:
//!
//! * [`board`]: a sparse [`Grid`] of [`Cell`]s that places ships, keeps a one-cell
//!   buffer zone around every placed ship, and resolves incoming shots.
//! * [`ships`]: the [`Ship`] entity, its fixed-size [`ShipKind`] and its damage state
//!   machine.
//! * [`fleet`]: the [`ShipsFleet`] inventory of ship kinds still waiting in port versus
//!   ships currently deployed.
//! * [`game`]: the [`Game`] roster of two [`Player`]s and the alternating history of
//!   [`Salvo`]s fired between them.
//!
//! Everything is synchronous and single-threaded. Callers embedding a [`Game`] in a
//! concurrent server must serialize mutating calls per game.

pub use self::{
    board::{Cell, CellState, Coordinate, Grid},
    fleet::ShipsFleet,
    game::{Game, GameOptions, OptionKey},
    player::{Player, PlayerId, Role},
    salvo::{Response, Salvo, Shot},
    ships::{DamageState, Orientation, Ship, ShipId, ShipKind},
};

pub mod board;
pub mod fleet;
pub mod game;
pub mod player;
pub mod salvo;
pub mod ships;

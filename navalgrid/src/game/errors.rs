//! Errors used by the [`Game`][crate::game::Game].

use std::fmt::Debug;

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{board::CannotShootReason, player::Component};

/// Reason why a salvo could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotFireReason {
    /// The target was also the target of the previous salvo.
    #[error("this player can not be fired at two times in a row")]
    ConsecutiveTarget,
    /// The salvo doesn't have the configured number of shots.
    #[error("salvo should have exactly {expected} shots, got {actual}")]
    ShotCount { expected: usize, actual: usize },
    /// The target is not part of the game.
    #[error("the target is not a player of this game")]
    UnknownTarget,
    /// There is no other player to fire the salvo.
    #[error("the target has no opponent")]
    MissingOpponent,
    /// The target has no grid or fleet of their own attached.
    #[error("the target is missing {0:?}")]
    Missing(BitFlags<Component>),
    /// One of the shots can't be resolved against the target's grid.
    #[error("{0}")]
    Shot(CannotShootReason),
}

/// Error returned when a salvo is rejected. A rejected salvo has no effect on the game.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not fire at {target:?}: {reason}")]
pub struct SalvoError<P: Debug> {
    #[source]
    reason: CannotFireReason,
    target: P,
}

impl<P: Debug> SalvoError<P> {
    pub(super) fn new(reason: CannotFireReason, target: P) -> Self {
        Self { reason, target }
    }

    /// Get the reason the salvo was rejected.
    pub fn reason(&self) -> CannotFireReason {
        self.reason
    }

    /// The player the salvo was aimed at.
    pub fn target(&self) -> &P {
        &self.target
    }

    pub fn into_target(self) -> P {
        self.target
    }
}

//! Errors used by ships and the enums that describe them.

use thiserror::Error;

use crate::ships::DamageState;

/// Error returned when converting a raw number into one of the crate's enums fails.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid {kind} value: {value}")]
pub struct InvalidDiscriminant {
    /// Name of the enum that rejected the value.
    kind: &'static str,
    /// The rejected value.
    value: u8,
}

impl InvalidDiscriminant {
    /// Construct an error for the given enum name and value.
    pub(crate) fn new(kind: &'static str, value: u8) -> Self {
        Self { kind, value }
    }

    /// Name of the enum that rejected the value.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected value.
    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Error returned when trying to move a ship's damage state backwards.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot change ship state from {current:?} back to {requested:?}")]
pub struct StateError {
    current: DamageState,
    requested: DamageState,
}

impl StateError {
    pub(super) fn new(current: DamageState, requested: DamageState) -> Self {
        Self { current, requested }
    }

    /// The state the ship was in.
    pub fn current(&self) -> DamageState {
        self.current
    }

    /// The state that was rejected.
    pub fn requested(&self) -> DamageState {
        self.requested
    }
}

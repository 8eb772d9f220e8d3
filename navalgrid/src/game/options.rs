//! Configuration of a [`Game`][crate::game::Game].

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Format every option value has to match: a positive integer without leading zeros.
pub const OPTION_PATTERN: &str = r"^[1-9]\d*$";

static OPTION_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(OPTION_PATTERN).unwrap());

/// Keys of the recognised game options.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OptionKey {
    /// Number of shots in every salvo.
    ShotsPerRound,
    /// Size of the players' grids.
    GridSize,
}

impl OptionKey {
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::ShotsPerRound => "shots-per-round",
            OptionKey::GridSize => "grid-size",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shots-per-round" => Ok(OptionKey::ShotsPerRound),
            "grid-size" => Ok(OptionKey::GridSize),
            other => Err(UnknownOptionError {
                key: other.to_owned(),
            }),
        }
    }
}

/// Error returned when parsing an option key that is not recognised.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown game option {key:?}")]
pub struct UnknownOptionError {
    key: String,
}

impl UnknownOptionError {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Error returned when an option value doesn't match [`OPTION_PATTERN`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{key} should match the pattern {}, got {value:?}", OPTION_PATTERN)]
pub struct OptionError {
    key: OptionKey,
    value: String,
}

impl OptionError {
    fn new(key: OptionKey, value: &str) -> Self {
        Self {
            key,
            value: value.to_owned(),
        }
    }

    pub fn key(&self) -> OptionKey {
        self.key
    }

    /// The rejected value, as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Options of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameOptions {
    shots_per_round: usize,
    grid_size: usize,
}

impl GameOptions {
    /// Default number of shots in every salvo.
    pub const DEFAULT_SHOTS_PER_ROUND: usize = 5;
    /// Default size of the players' grids.
    pub const DEFAULT_GRID_SIZE: usize = 10;

    /// Build options from textual key/value pairs. Keys that are not recognised are
    /// ignored; values of recognised keys must match [`OPTION_PATTERN`].
    pub fn from_pairs<'a, T>(pairs: T) -> Result<Self, OptionError>
    where
        T: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            if let Ok(key) = key.parse() {
                options.set_str(key, value)?;
            }
        }
        Ok(options)
    }

    pub fn shots_per_round(&self) -> usize {
        self.shots_per_round
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Get the value of the given option.
    pub fn get(&self, key: OptionKey) -> usize {
        match key {
            OptionKey::ShotsPerRound => self.shots_per_round,
            OptionKey::GridSize => self.grid_size,
        }
    }

    /// Set the given option. Fails, leaving the options unchanged, unless `value` is a
    /// positive integer.
    pub fn set(&mut self, key: OptionKey, value: usize) -> Result<(), OptionError> {
        self.set_str(key, &value.to_string())
    }

    /// Set the given option from its textual form.
    pub fn set_str(&mut self, key: OptionKey, value: &str) -> Result<(), OptionError> {
        if !OPTION_FORMAT.is_match(value) {
            return Err(OptionError::new(key, value));
        }
        let parsed = value.parse().map_err(|_| OptionError::new(key, value))?;
        match key {
            OptionKey::ShotsPerRound => self.shots_per_round = parsed,
            OptionKey::GridSize => self.grid_size = parsed,
        }
        Ok(())
    }

    /// Builder-style variant of [`set`][Self::set].
    pub fn with(mut self, key: OptionKey, value: usize) -> Result<Self, OptionError> {
        self.set(key, value)?;
        Ok(self)
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shots_per_round: Self::DEFAULT_SHOTS_PER_ROUND,
            grid_size: Self::DEFAULT_GRID_SIZE,
        }
    }
}

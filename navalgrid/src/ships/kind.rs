// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{convert::TryFrom, fmt};

use crate::{board::Coordinate, ships::InvalidDiscriminant};

/// Kind of a ship. Every kind has a fixed size shared by all ships of that kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Aircraft carrier: length 5.
    AircraftCarrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
    /// Submarine: length 1.
    Submarine,
}

impl ShipKind {
    /// Inventory every player starts with unless configured otherwise.
    pub const STANDARD_FLEET: [ShipKind; 8] = [
        ShipKind::AircraftCarrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::Submarine,
    ];

    /// Get the number of cells a ship of this kind occupies.
    pub fn size(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 1,
        }
    }

    /// Human readable name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "aircraft carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Placement orientation of a ship. Ships extend down from their offset when vertical
/// and right from it when horizontal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Get the coordinate `step` cells away from `start` along this orientation, or
    /// `None` if it can't be represented.
    pub(crate) fn advance(self, start: Coordinate, step: usize) -> Option<Coordinate> {
        match self {
            Orientation::Vertical => start
                .row
                .checked_add(step)
                .map(|row| Coordinate::new(row, start.col)),
            Orientation::Horizontal => start
                .col
                .checked_add(step)
                .map(|col| Coordinate::new(start.row, col)),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = InvalidDiscriminant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Orientation::Vertical),
            1 => Ok(Orientation::Horizontal),
            other => Err(InvalidDiscriminant::new("orientation", other)),
        }
    }
}

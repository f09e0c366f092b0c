//! The six hex-neighbour directions on the packed grid

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Hex direction, named after the compass side it points to.
///
/// On the packed grid a step in a direction is a fixed signed bit shift:
/// the row stride is 11, and the north-east/south-west axis moves one
/// column as well as one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum Direction {
    West = 0,
    East = 1,
    NoEa = 2,
    NoWe = 3,
    SoEa = 4,
    SoWe = 5,
}

impl Direction {
    /// All directions in token order
    pub const ALL: [Direction; 6] = [
        Direction::West,
        Direction::East,
        Direction::NoEa,
        Direction::NoWe,
        Direction::SoEa,
        Direction::SoWe,
    ];

    /// Signed bit shift of a single step
    pub const fn shift(self) -> i8 {
        match self {
            Direction::West => -1,
            Direction::East => 1,
            Direction::NoWe => 11,
            Direction::NoEa => 12,
            Direction::SoWe => -12,
            Direction::SoEa => -11,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NoWe => Direction::SoEa,
            Direction::SoEa => Direction::NoWe,
            Direction::NoEa => Direction::SoWe,
            Direction::SoWe => Direction::NoEa,
        }
    }

    /// Position in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid delta (dx, dz) of a single step
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::NoWe => (0, 1),
            Direction::NoEa => (1, 1),
            Direction::SoWe => (-1, -1),
            Direction::SoEa => (0, -1),
        }
    }

    /// Lower-case token used on input and in generated function names
    pub const fn token(self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
            Direction::NoEa => "noea",
            Direction::NoWe => "nowe",
            Direction::SoEa => "soea",
            Direction::SoWe => "sowe",
        }
    }
}

impl FromStr for Direction {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.token() == token)
            .ok_or_else(|| GeometryError::UnknownDirection(s.to_string()))
    }
}

impl TryFrom<String> for Direction {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for &'static str {
    fn from(direction: Direction) -> Self {
        direction.token()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

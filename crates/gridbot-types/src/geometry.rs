use crate::ParseDirectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid cell. `x` is the column index, `y` is the row index.
///
/// Coordinates are signed: a move target one step past the top or left
/// edge is representable before it is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one unit along `dir`, or `None` if a coordinate
    /// would overflow `i32`.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.vector();
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The direction the robot faces.
///
/// Variants are declared in clockwise order; turning is an index shift
/// over [`Direction::CLOCKWISE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All directions, clockwise from North.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    /// Rotate 90° counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::CLOCKWISE[(self.ordinal() + 3) % 4]
    }

    /// Rotate 90° clockwise.
    pub fn turn_right(self) -> Self {
        Self::CLOCKWISE[(self.ordinal() + 1) % 4]
    }

    /// Unit vector `(dx, dy)`. North decreases the row index.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Self::North),
            "E" => Ok(Self::East),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

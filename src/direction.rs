//! Compass directions and their rotation order.

use crate::interpreter::ParseError;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four compass points the robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// All directions in counterclockwise order.
const CCW_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn ccw_index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::North => 1,
            Direction::West => 2,
            Direction::South => 3,
        }
    }

    /// Rotates 90 degrees counterclockwise.
    pub fn rotate_left(self) -> Direction {
        CCW_ORDER[(self.ccw_index() + 1) % CCW_ORDER.len()]
    }

    /// Rotates 90 degrees clockwise.
    pub fn rotate_right(self) -> Direction {
        let len = CCW_ORDER.len();
        CCW_ORDER[(self.ccw_index() + len - 1) % len]
    }

    /// Unit step taken by a single move in this direction.
    pub fn delta(self) -> I64Vec2 {
        match self {
            Direction::North => I64Vec2::Y,
            Direction::East => I64Vec2::X,
            Direction::South => I64Vec2::NEG_Y,
            Direction::West => I64Vec2::NEG_X,
        }
    }

    /// Canonical upper-case name, as used in commands and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::InvalidDirection {
                value: s.to_string(),
            })
    }
}

//! Robot placement state and the operations that drive it.

use crate::board::{BoardError, BoardTarget, Rotation};
use crate::direction::Direction;
use glam::I64Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the board.
///
/// Positions carry no bounds of their own; whether one lies on the board is
/// decided by the [`Board`](crate::board::Board) it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `delta`, or `None` if a coordinate overflows.
    pub fn offset(self, delta: I64Vec2) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl From<I64Vec2> for Position {
    fn from(v: I64Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Position> for I64Vec2 {
    fn from(p: Position) -> Self {
        I64Vec2::new(p.x, p.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where the robot stands and which way it faces.
///
/// Only exists once a `PLACE` has succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub facing: Direction,
}

/// Operations that can be performed against a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotOp {
    /// Put the robot at `position` facing `facing` (`PLACE x,y,F`).
    Place { position: Position, facing: Direction },
    /// Turn 90 degrees counterclockwise (`LEFT`).
    RotateLeft,
    /// Turn 90 degrees clockwise (`RIGHT`).
    RotateRight,
    /// Step one cell forward (`MOVE`).
    Move,
    /// Write the current placement to the report sink (`REPORT`).
    Report,
}

impl RobotOp {
    /// Applies this operation to `target`.
    ///
    /// Rejections (`NotPlaced`, `OutOfBounds`) leave the target unchanged.
    pub fn apply<T: BoardTarget + ?Sized>(&self, target: &mut T) -> Result<(), BoardError> {
        match *self {
            RobotOp::Place { position, facing } => target.place(position, facing),
            RobotOp::RotateLeft => target.rotate(Rotation::Left).map(drop),
            RobotOp::RotateRight => target.rotate(Rotation::Right).map(drop),
            RobotOp::Move => target.move_robot().map(drop),
            RobotOp::Report => target.report(),
        }
    }
}

impl fmt::Display for RobotOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotOp::Place { position, facing } => {
                write!(f, "PLACE {},{},{}", position.x, position.y, facing)
            }
            RobotOp::RotateLeft => f.write_str("LEFT"),
            RobotOp::RotateRight => f.write_str("RIGHT"),
            RobotOp::Move => f.write_str("MOVE"),
            RobotOp::Report => f.write_str("REPORT"),
        }
    }
}

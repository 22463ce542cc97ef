//! # toy-robot
//!
//! A simulator for a single robot on a bounded rectangular board, driven by text
//! commands (`PLACE x,y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! Commands are parsed up front into [`RobotOp`]s by the [`RobotInterpreter`] and then
//! applied in order to a [`Board`], which rejects anything that would take the robot
//! off the edge or act on a robot that was never placed.

pub mod board;
pub mod direction;
pub mod interpreter;
pub mod robot;

pub use board::*;
pub use direction::*;
pub use interpreter::*;
pub use robot::*;

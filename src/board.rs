use crate::direction::Direction;
use crate::interpreter::RobotConfig;
use crate::robot::{Placement, Position};
use glam::I64Vec2;
use std::io::{self, Write};
use thiserror::Error;

/// Advisory rejections raised while applying operations to a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The robot has not been placed yet.
    #[error("robot has not been placed on the board")]
    NotPlaced,

    /// The target cell lies outside `[0, width) x [0, height)`.
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// Writing the report line to the sink failed.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Turning sense for [`BoardTarget::rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

/// The narrow interface operations are applied against.
///
/// [`Board`] is the real implementation; tests substitute recording mocks.
pub trait BoardTarget {
    /// Places (or re-places) the robot.
    fn place(&mut self, position: Position, facing: Direction) -> Result<(), BoardError>;

    /// Steps the robot one cell forward and returns its new position.
    fn move_robot(&mut self) -> Result<Position, BoardError>;

    /// Turns the robot in place and returns its new facing.
    fn rotate(&mut self, rotation: Rotation) -> Result<Direction, BoardError>;

    /// Writes the robot's placement to the report sink.
    fn report(&mut self) -> Result<(), BoardError>;
}

/// A bounded board holding at most one robot.
///
/// The placement record is `None` until the first successful `place`, and every
/// mutator validates against the board bounds before committing, so a present
/// record always lies on the board.
#[derive(Debug)]
pub struct Board<W = io::Stdout> {
    width: u32,
    height: u32,
    placement: Option<Placement>,
    report_output: W,
}

impl Board<io::Stdout> {
    /// Creates a `width` x `height` board reporting to standard output.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_report_output(width, height, io::stdout())
    }

    /// Creates a board sized by `config`, reporting to standard output.
    pub fn from_config(config: &RobotConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

impl<W: Write> Board<W> {
    /// Creates a `width` x `height` board that writes reports to `out`.
    ///
    /// Both dimensions must be positive.
    pub fn with_report_output(width: u32, height: u32, out: W) -> Self {
        debug_assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            placement: None,
            report_output: out,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current placement record, if the robot has been placed.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Returns `true` if `position` lies on the board.
    pub fn contains(&self, position: Position) -> bool {
        let inside = |v: i64, limit: u32| u32::try_from(v).is_ok_and(|v| v < limit);
        inside(position.x, self.width) && inside(position.y, self.height)
    }

    pub fn report_output(&self) -> &W {
        &self.report_output
    }

    pub fn into_report_output(self) -> W {
        self.report_output
    }

    fn out_of_bounds(&self, position: Position) -> BoardError {
        BoardError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        }
    }

    fn validate(&self, position: Position) -> Result<Position, BoardError> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(self.out_of_bounds(position))
        }
    }

    fn placed_mut(&mut self) -> Result<&mut Placement, BoardError> {
        self.placement.as_mut().ok_or(BoardError::NotPlaced)
    }
}

impl<W: Write> BoardTarget for Board<W> {
    fn place(&mut self, position: Position, facing: Direction) -> Result<(), BoardError> {
        let position = self.validate(position)?;
        self.placement = Some(Placement { position, facing });
        Ok(())
    }

    fn move_robot(&mut self) -> Result<Position, BoardError> {
        let current = self.placement.ok_or(BoardError::NotPlaced)?;
        let delta = current.facing.delta();
        let position = match current.position.offset(delta) {
            Some(candidate) => self.validate(candidate)?,
            // Overflowing coordinates are never on the board; saturate for the error.
            None => {
                let saturated = I64Vec2::from(current.position).saturating_add(delta);
                return Err(self.out_of_bounds(saturated.into()));
            }
        };
        self.placed_mut()?.position = position;
        Ok(position)
    }

    fn rotate(&mut self, rotation: Rotation) -> Result<Direction, BoardError> {
        let placement = self.placed_mut()?;
        placement.facing = match rotation {
            Rotation::Left => placement.facing.rotate_left(),
            Rotation::Right => placement.facing.rotate_right(),
        };
        Ok(placement.facing)
    }

    fn report(&mut self) -> Result<(), BoardError> {
        let Placement { position, facing } = self.placement.ok_or(BoardError::NotPlaced)?;
        writeln!(self.report_output, "Robot position: {position} facing: {facing}")?;
        Ok(())
    }
}

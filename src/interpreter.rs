//! Interpreter that turns command text into [`RobotOp`]s and runs them against a board.
//!
//! The entry point is [`RobotInterpreter`]. Configure it with a [`RobotConfig`],
//! load a command list with [`RobotInterpreter::parse_program`] or
//! [`RobotInterpreter::load_file`], then apply it with [`RobotInterpreter::run`].
//!
//! Loading is all-or-nothing: a single malformed line rejects the whole list
//! before any operation is applied. Once loaded, rejected operations are logged
//! and skipped; nothing stops a run part way.

use crate::board::{Board, BoardTarget};
use crate::direction::Direction;
use crate::robot::{Position, RobotOp};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while parsing a single command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command detected: '{line}'")]
    EmptyCommand { line: String },

    #[error("invalid command detected: '{line}'")]
    UnknownCommand { line: String },

    #[error("PLACE command requires 3 parameters, but {found} were detected: '{line}'")]
    MissingPlaceArguments { found: usize, line: String },

    #[error("{axis} pos parameter not a number ({value}): {source}")]
    InvalidCoordinate {
        axis: char,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid direction parameter detected: '{value}'")]
    InvalidDirection { value: String },
}

/// Errors raised while loading a whole command list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading command list: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Configuration for robot interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Number of columns on the board. Must be positive.
    pub width: u32,
    /// Number of rows on the board. Must be positive.
    pub height: u32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

/// Outcome counts of a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Operations the board accepted.
    pub applied: usize,
    /// Operations the board rejected and skipped.
    pub rejected: usize,
}

/// Parses robot commands and drives a board with them.
#[derive(Clone, Debug, Default)]
pub struct RobotInterpreter {
    config: RobotConfig,
}

impl RobotInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub fn new(config: RobotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Builds an empty board of the configured size that reports to stdout.
    pub fn board(&self) -> Board {
        Board::from_config(&self.config)
    }

    /// Parses one command line.
    ///
    /// The line is trimmed, upper-cased and split on whitespace; the first token
    /// selects the command. Tokens after a parameterless command are ignored.
    /// `PLACE` coordinates are not checked against any board here.
    pub fn parse_line(&self, src: &str) -> Result<RobotOp, ParseError> {
        let upper = src.trim().to_uppercase();
        let mut tokens = upper.split_whitespace();

        let Some(keyword) = tokens.next() else {
            return Err(ParseError::EmptyCommand {
                line: src.to_string(),
            });
        };

        match keyword {
            "PLACE" => {
                let params: Vec<&str> = tokens
                    .next()
                    .map(|args| args.split(',').collect())
                    .unwrap_or_default();
                if params.len() < 3 {
                    return Err(ParseError::MissingPlaceArguments {
                        found: params.len(),
                        line: src.to_string(),
                    });
                }
                let coord = |axis: char, value: &str| {
                    value
                        .parse::<i64>()
                        .map_err(|source| ParseError::InvalidCoordinate {
                            axis,
                            value: value.to_string(),
                            source,
                        })
                };
                let x = coord('x', params[0])?;
                let y = coord('y', params[1])?;
                let facing: Direction = params[2].parse()?;
                Ok(RobotOp::Place {
                    position: Position::new(x, y),
                    facing,
                })
            }
            "LEFT" => Ok(RobotOp::RotateLeft),
            "RIGHT" => Ok(RobotOp::RotateRight),
            "MOVE" => Ok(RobotOp::Move),
            "REPORT" => Ok(RobotOp::Report),
            _ => Err(ParseError::UnknownCommand {
                line: src.to_string(),
            }),
        }
    }

    /// Parses every line of `reader` into an operation list.
    ///
    /// Fails on the first unreadable or malformed line; nothing is returned
    /// for the lines that did parse. Invalid UTF-8 is replaced rather than
    /// rejected, so it only fails a line where it lands in a checked token.
    pub fn parse_program<R: BufRead>(&self, mut reader: R) -> Result<Vec<RobotOp>, LoadError> {
        let mut ops = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            let op = self.parse_line(&line).map_err(|source| LoadError::Parse {
                line: line_no,
                source,
            })?;
            ops.push(op);
        }
        debug!("parsed {} command(s)", ops.len());
        Ok(ops)
    }

    /// Opens `path` and parses it as a command list.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<RobotOp>, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_program(BufReader::new(file))
    }

    /// Applies `ops` to `target` strictly in order, each to completion.
    ///
    /// Rejected operations are logged and skipped.
    pub fn run<T: BoardTarget + ?Sized>(&self, ops: &[RobotOp], target: &mut T) -> RunSummary {
        let mut summary = RunSummary::default();
        for op in ops {
            match op.apply(target) {
                Ok(()) => {
                    debug!("applied {op}");
                    summary.applied += 1;
                }
                Err(err) => {
                    warn!("ignored {op}: {err}");
                    summary.rejected += 1;
                }
            }
        }
        info!(
            "run finished: {} applied, {} rejected",
            summary.applied, summary.rejected
        );
        summary
    }

    /// Parses all of `reader`, then runs the result against `target`.
    pub fn run_source<R: BufRead, T: BoardTarget + ?Sized>(
        &self,
        reader: R,
        target: &mut T,
    ) -> Result<RunSummary, LoadError> {
        let ops = self.parse_program(reader)?;
        Ok(self.run(&ops, target))
    }
}

//! Command-line entry point: `toy-robot <commands-file>`.
//!
//! Loads the whole command list first and exits non-zero if any line is
//! malformed; otherwise runs every command on a 5x5 board (overridable through
//! `TOY_ROBOT_WIDTH` / `TOY_ROBOT_HEIGHT`) and prints reports to stdout.

use anyhow::{Context, Result, bail};
use std::env;
use toy_robot::{RobotConfig, RobotInterpreter};

fn dimension(var: &str, default: u32) -> Result<u32> {
    match env::var(var) {
        Ok(raw) => {
            let value: u32 = raw
                .trim()
                .parse()
                .with_context(|| format!("{var} must be a positive integer, got '{raw}'"))?;
            if value == 0 {
                bail!("{var} must be a positive integer, got '{raw}'");
            }
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("failed reading {var}")),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; set RUST_LOG=debug to trace every command.
    env_logger::init();

    let Some(file_name) = env::args().nth(1) else {
        bail!("missing file name from the argument list\nexpected usage: toy-robot commands.txt");
    };

    let defaults = RobotConfig::default();
    let config = RobotConfig {
        width: dimension("TOY_ROBOT_WIDTH", defaults.width)?,
        height: dimension("TOY_ROBOT_HEIGHT", defaults.height)?,
    };

    let interpreter = RobotInterpreter::new(config);
    let ops = interpreter
        .load_file(&file_name)
        .context("failed to scan command list")?;

    let mut board = interpreter.board();
    interpreter.run(&ops, &mut board);
    Ok(())
}

//! Checking that a directory of broken games is rejected.
//!
//! Every `.pgn` file in the directory is expected to break a rule of Two
//! Move Chess somewhere. The check stops at the first game that replays
//! cleanly.

use crate::error::RunError;
use crate::run::{run_file, ReplayOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replays every `.pgn` file in `dir` and requires each one to fail.
///
/// With `verbose`, the path and error of every game are written to `out`.
/// Returns the number of games checked.
///
/// # Errors
///
/// Returns [`RunError::ViolationNotDetected`] for the first game that
/// replays without an error.
pub fn check_violations<W: Write>(dir: &Path, verbose: bool, out: &mut W) -> Result<usize, RunError> {
    let pattern = dir.join("*.pgn");
    let mut games: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .collect::<Result<_, glob::GlobError>>()?;
    games.sort();
    tracing::info!("Checking {} games in {}", games.len(), dir.display());

    let options = ReplayOptions::default();
    for game in &games {
        match run_file(game, &options, &mut std::io::sink()) {
            Ok(_) => return Err(RunError::ViolationNotDetected(game.clone())),
            Err(err) => {
                tracing::debug!("{}: {}", game.display(), err);
                if verbose {
                    writeln!(out, "{}", game.display())?;
                    writeln!(out, "{}", err)?;
                    writeln!(out)?;
                }
            }
        }
    }
    Ok(games.len())
}

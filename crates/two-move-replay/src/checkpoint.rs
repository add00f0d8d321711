//! Scheduling board snapshots during a replay.
//!
//! A checkpoint names a moment in the game and, optionally, a file to write
//! the board to at that moment. The moment is a turn number as printed in
//! the game record (`8`, or `8.5` for the middle of turn 8) or `end`.
//! Turn numbers count full turns, so they are doubled to index the flat list
//! of turn tokens.

use std::path::PathBuf;
use thiserror::Error;

/// The turn keyword for the end of the game.
pub const END: &str = "end";

/// Errors that can occur when parsing checkpoints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckpointError {
    /// The turn part is neither a non-negative number nor `end`.
    #[error("Invalid checkpoint turn {0:?}: expected a turn number or \"end\"")]
    InvalidTurn(String),
}

/// A point in the replay at which the board is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Number of turn tokens played before the snapshot.
    pub ply: usize,
    /// File to write the board to; printed to the terminal when `None`.
    pub output: Option<PathBuf>,
}

impl Checkpoint {
    /// Creates a checkpoint after `ply` turn tokens, shown on the terminal
    /// when `output` is `None`.
    #[must_use]
    pub fn new(ply: usize, output: Option<PathBuf>) -> Self {
        Checkpoint { ply, output }
    }
}

/// Resolves raw checkpoints against a game of `game_end` turn tokens.
///
/// Each raw checkpoint is `<turn>` or `<turn>:<path>`. Checkpoints past the
/// end of the game are dropped. If no checkpoint lands exactly on the end of
/// the game, one without an output file is appended. The result is ordered
/// by ply.
///
/// # Errors
///
/// Returns [`CheckpointError::InvalidTurn`] if a turn part cannot be parsed.
///
/// # Example
///
/// ```
/// use two_move_replay::checkpoint::schedule;
///
/// let plies: Vec<usize> = schedule(&["8", "20"], 62)
///     .unwrap()
///     .iter()
///     .map(|c| c.ply)
///     .collect();
/// assert_eq!(plies, vec![16, 40, 62]);
/// ```
pub fn schedule<S: AsRef<str>>(
    raw: &[S],
    game_end: usize,
) -> Result<Vec<Checkpoint>, CheckpointError> {
    let mut checkpoints = Vec::with_capacity(raw.len() + 1);
    let mut end_found = false;

    for action in raw {
        let (turn, output) = match action.as_ref().split_once(':') {
            Some((turn, path)) => (turn, Some(PathBuf::from(path))),
            None => (action.as_ref(), None),
        };
        let ply = if turn.trim() == END {
            game_end
        } else {
            turn_to_ply(turn)?
        };
        if ply == game_end {
            end_found = true;
        }
        if ply <= game_end {
            checkpoints.push(Checkpoint::new(ply, output));
        }
    }

    if !end_found {
        checkpoints.push(Checkpoint::new(game_end, None));
    }
    checkpoints.sort_by_key(|c| c.ply);
    Ok(checkpoints)
}

/// Converts a printed turn number to a count of turn tokens.
fn turn_to_ply(turn: &str) -> Result<usize, CheckpointError> {
    let invalid = || CheckpointError::InvalidTurn(turn.to_string());
    let number: f64 = turn.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 {
        return Err(invalid());
    }
    Ok((2.0 * number) as usize)
}

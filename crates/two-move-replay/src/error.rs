//! Errors raised while replaying game files.

use crate::checkpoint::CheckpointError;
use crate::pgn::PgnError;
use std::path::PathBuf;
use thiserror::Error;
use two_move_chess::{FenError, ReplayError};

/// Errors that can occur when replaying or checking game files.
#[derive(Error, Debug)]
pub enum RunError {
    /// The input file is neither a `.pgn` game nor a `.fen` position.
    #[error("Input file name does not end in \".pgn\" or \".fen\": {}", .0.display())]
    UnsupportedInput(PathBuf),
    #[error(transparent)]
    Pgn(#[from] PgnError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
    /// The game broke the rules of Two Move Chess.
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid violations directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to list violations directory: {0}")]
    Glob(#[from] glob::GlobError),
    /// A game expected to break the rules replayed cleanly.
    #[error("The test in {} did not elicit an error", .0.display())]
    ViolationNotDetected(PathBuf),
}

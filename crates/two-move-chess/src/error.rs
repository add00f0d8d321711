//! Turn violations and replay errors.

use crate::forcing::ForcingReason;
use crate::turn::MoveType;
use thiserror::Error;

/// Why a single turn was rejected.
///
/// Every variant is fatal to the replay that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The chess engine refused the move.
    #[error("illegal chess move {notation}: {reason}")]
    IllegalChessMove { notation: String, reason: String },
    /// A double move was attempted where only a response move is allowed.
    #[error("a two move turn cannot follow a {after}")]
    IllegalTurnShape { after: MoveType },
    /// The first half of a double move was forcing and should have been played alone.
    #[error("first move {notation} is forcing ({reason}) and must be played alone")]
    InvalidDoubleMove {
        notation: String,
        reason: ForcingReason,
    },
    /// Both halves of a double move moved the same piece.
    #[error("the same piece cannot move twice in one turn")]
    RepeatedPieceMove,
    /// A one-move turn whose move is not forcing.
    #[error("{notation} is not forcing and cannot be a single move turn")]
    InvalidSingleMove { notation: String },
    /// The session is in a state with no defined transition.
    #[error("no turn can follow a {0}")]
    InvalidState(MoveType),
    /// The turn token is not one move or two comma separated moves.
    #[error("malformed turn: {0:?}")]
    MalformedToken(String),
}

/// A starting position that could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid FEN: {0}")]
pub struct FenError(pub String);

/// A rejected turn together with where it occurred in the game record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("turn {} ({token}): {kind}", .index + 1)]
pub struct ReplayError {
    /// Zero-based index of the turn token in the game record.
    pub index: usize,
    /// The turn token as written.
    pub token: String,
    #[source]
    pub(crate) kind: TurnError,
}

impl ReplayError {
    /// Returns the violation.
    #[must_use]
    pub fn kind(&self) -> &TurnError {
        &self.kind
    }

    /// Consumes the error and returns the violation.
    #[must_use]
    pub fn into_kind(self) -> TurnError {
        self.kind
    }
}

//! Turn vocabulary: move types and raw turn tokens.

use crate::error::TurnError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the two moves of a double-move turn.
pub const MOVE_SEPARATOR: char = ',';

/// The role a move played in its turn.
///
/// The replay session holds exactly one of these as its current state.
/// Only [`DoubleMove`](MoveType::DoubleMove), [`SingleMove`](MoveType::SingleMove)
/// and [`ResponseMove`](MoveType::ResponseMove) survive a completed turn;
/// [`StartOfGame`](MoveType::StartOfGame) exists before the first turn and
/// [`DoubleHalf`](MoveType::DoubleHalf) only while a double move is half played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    /// No move has been played yet.
    StartOfGame,
    /// First move of a double turn, not yet confirmed.
    DoubleHalf,
    /// Completed second move of a double turn.
    DoubleMove,
    /// A turn cut down to one move because that move was forcing.
    SingleMove,
    /// The mandatory one-move reply after a single move or the game's start.
    ResponseMove,
}

impl MoveType {
    /// Returns true if this type may be the state between two turns.
    #[must_use]
    pub const fn is_turn_boundary(self) -> bool {
        matches!(
            self,
            MoveType::DoubleMove | MoveType::SingleMove | MoveType::ResponseMove
        )
    }

    /// Returns true if the next turn must be a lone response move.
    #[must_use]
    pub const fn requires_response(self) -> bool {
        matches!(self, MoveType::StartOfGame | MoveType::SingleMove)
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveType::StartOfGame => "start of game",
            MoveType::DoubleHalf => "first half of double move",
            MoveType::DoubleMove => "double move",
            MoveType::SingleMove => "single move",
            MoveType::ResponseMove => "response move",
        };
        f.write_str(name)
    }
}

/// One player's turn as written in the game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnToken {
    /// A turn of exactly one move.
    Single(String),
    /// Two moves by the same player, in order.
    Double(String, String),
}

impl FromStr for TurnToken {
    type Err = TurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TurnError::MalformedToken(s.to_string());
        let mut parts = s.trim().split(MOVE_SEPARATOR).map(str::trim);

        let first = parts.next().filter(|m| !m.is_empty()).ok_or_else(malformed)?;
        match (parts.next(), parts.next()) {
            (None, _) => Ok(TurnToken::Single(first.to_string())),
            (Some(second), None) if !second.is_empty() => {
                Ok(TurnToken::Double(first.to_string(), second.to_string()))
            }
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for TurnToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnToken::Single(m) => f.write_str(m),
            TurnToken::Double(m1, m2) => write!(f, "{}{}{}", m1, MOVE_SEPARATOR, m2),
        }
    }
}

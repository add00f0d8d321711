//! Forcing-move detection.
//!
//! A forcing move ends its turn: it may be played only as a single move, and
//! it may never open a double move. A move is forcing if it
//! - gives check or checkmate,
//! - leaves the opponent a legal en passant capture,
//! - captures a piece, or
//! - promotes a pawn.

use crate::applier::MoveApplier;
use crate::record::MoveRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The condition that made a move forcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcingReason {
    Checkmate,
    Check,
    EnPassantOpportunity,
    Capture,
    Promotion,
}

impl fmt::Display for ForcingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForcingReason::Checkmate => "checkmate",
            ForcingReason::Check => "check",
            ForcingReason::EnPassantOpportunity => "en passant opportunity",
            ForcingReason::Capture => "capture",
            ForcingReason::Promotion => "promotion",
        };
        f.write_str(name)
    }
}

/// Returns why the move in `after` is forcing, or `None` if it is quiet.
///
/// `position` is the position right after the move and `piece_count_before`
/// the number of pieces on the board right before it.
pub fn forcing_reason<R: MoveApplier>(
    rules: &R,
    position: &R::Position,
    piece_count_before: usize,
    after: &MoveRecord,
) -> Option<ForcingReason> {
    if rules.is_checkmate(position) {
        Some(ForcingReason::Checkmate)
    } else if rules.is_check(position) {
        Some(ForcingReason::Check)
    } else if rules.has_en_passant_opportunity(position) {
        Some(ForcingReason::EnPassantOpportunity)
    } else if after.piece_count != piece_count_before {
        Some(ForcingReason::Capture)
    } else if after.promotion.is_some() {
        Some(ForcingReason::Promotion)
    } else {
        None
    }
}

/// Returns true if the move in `after` is forcing.
pub fn is_forcing<R: MoveApplier>(
    rules: &R,
    position: &R::Position,
    piece_count_before: usize,
    after: &MoveRecord,
) -> bool {
    forcing_reason(rules, position, piece_count_before, after).is_some()
}

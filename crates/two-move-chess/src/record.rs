//! Per-move and per-turn history.

use crate::applier::AppliedMove;
use crate::turn::MoveType;
use shakmaty::{Color, Role, Square};

/// A move that has been applied to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move as written in the game record.
    pub notation: String,
    /// The side that played it.
    pub side: Color,
    /// The role the move played in its turn.
    pub move_type: MoveType,
    pub from: Square,
    /// Landing square; the king's square for a castle.
    pub to: Square,
    pub promotion: Option<Role>,
    /// Rook landing square of a castle.
    pub rook_to: Option<Square>,
    /// Pieces on the board right after the move.
    pub piece_count: usize,
}

impl MoveRecord {
    /// Records `applied`, played as `notation` by `side`.
    ///
    /// # Arguments
    ///
    /// * `move_type` - The role the move played in its turn.
    /// * `piece_count` - Pieces on the board after the move.
    #[must_use]
    pub fn new(
        notation: &str,
        side: Color,
        move_type: MoveType,
        applied: AppliedMove,
        piece_count: usize,
    ) -> Self {
        MoveRecord {
            notation: notation.to_string(),
            side,
            move_type,
            from: applied.from,
            to: applied.to,
            promotion: applied.promotion,
            rook_to: applied.rook_to,
            piece_count,
        }
    }
}

/// A turn that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedTurn {
    /// The turn token as written.
    pub token: String,
    /// The player whose turn it was.
    pub side: Color,
    /// What the turn was played as.
    pub move_type: MoveType,
}

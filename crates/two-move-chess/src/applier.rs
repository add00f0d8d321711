//! The chess rules behind the turn-shape checks.
//!
//! The turn logic never decides chess legality on its own. It delegates to a
//! [`MoveApplier`], which plays a move written in SAN and answers yes/no and
//! counting questions about the resulting position. [`StandardChess`] is the
//! implementation for orthodox chess, backed by [`shakmaty`].

use crate::error::TurnError;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{
    CastlingMode, CastlingSide, Chess, Color, EnPassantMode, FromSetup, Move, Position, Role,
    Square,
};
use std::borrow::Cow;
use std::fmt;

/// Squares touched by a move, as seen by the turn-shape rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// Square the moving piece left.
    pub from: Square,
    /// Square the moving piece landed on. For a castle, the king's square.
    pub to: Square,
    /// Piece promoted to, if any.
    pub promotion: Option<Role>,
    /// Where the rook landed, if the move was a castle.
    pub rook_to: Option<Square>,
}

/// Trait for the chess engine consulted by a replay.
///
/// Implementations must treat positions as values: `apply` returns the new
/// position and never mutates its input.
pub trait MoveApplier {
    /// The board together with its side to move.
    type Position: Clone + fmt::Debug;

    /// Returns the standard starting position.
    fn initial_position(&self) -> Self::Position;

    /// Parses a position from FEN.
    fn from_fen(&self, fen: &str) -> Result<Self::Position, String>;

    /// Serializes a position as FEN.
    fn to_fen(&self, position: &Self::Position) -> String;

    /// Returns the side to move.
    fn side_to_move(&self, position: &Self::Position) -> Color;

    /// Plays `notation` as if `side` were to move.
    ///
    /// When `side` is not the side to move, the position is re-seated with
    /// `side` to move before the move is resolved. This is how one player
    /// makes two consecutive moves.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::IllegalChessMove`] if the notation cannot be
    /// parsed or names no legal move for `side`.
    fn apply(
        &self,
        position: &Self::Position,
        notation: &str,
        side: Color,
    ) -> Result<(Self::Position, AppliedMove), TurnError>;

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Self::Position) -> bool;

    /// Returns true if the side to move is checkmated.
    fn is_checkmate(&self, position: &Self::Position) -> bool;

    /// Returns true if the side to move can legally capture en passant.
    fn has_en_passant_opportunity(&self, position: &Self::Position) -> bool;

    /// Returns the number of pieces on the board, both colors.
    fn piece_count(&self, position: &Self::Position) -> usize;
}

/// Orthodox chess rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardChess;

impl StandardChess {
    /// Returns `position` with `side` to move, or a clone if it already is.
    fn seat(&self, position: &Chess, side: Color, notation: &str) -> Result<Chess, TurnError> {
        if position.turn() == side {
            return Ok(position.clone());
        }
        let mut setup = position.clone().into_setup(EnPassantMode::Legal);
        setup.turn = side;
        // The en passant square belongs to the other side's reply.
        setup.ep_square = None;
        Chess::from_setup(setup, CastlingMode::Standard).map_err(|e| TurnError::IllegalChessMove {
            notation: notation.to_string(),
            reason: format!("{} cannot move again here: {}", side_name(side), e),
        })
    }
}

impl MoveApplier for StandardChess {
    type Position = Chess;

    fn initial_position(&self) -> Chess {
        Chess::default()
    }

    fn from_fen(&self, fen: &str) -> Result<Chess, String> {
        let fen: Fen = fen.trim().parse().map_err(|e| format!("{}", e))?;
        fen.into_position(CastlingMode::Standard)
            .map_err(|e| format!("illegal position: {}", e))
    }

    fn to_fen(&self, position: &Chess) -> String {
        Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
    }

    fn side_to_move(&self, position: &Chess) -> Color {
        position.turn()
    }

    fn apply(
        &self,
        position: &Chess,
        notation: &str,
        side: Color,
    ) -> Result<(Chess, AppliedMove), TurnError> {
        let illegal = |reason: String| TurnError::IllegalChessMove {
            notation: notation.to_string(),
            reason,
        };

        let san: SanPlus = castle_with_letters(notation)
            .parse()
            .map_err(|e| illegal(format!("unreadable notation: {}", e)))?;
        let mut next = self.seat(position, side, notation)?;
        let m = san
            .san
            .to_move(&next)
            .map_err(|e| illegal(format!("{} for {}", e, side_name(side))))?;

        let applied = describe(&m, side);
        next.play_unchecked(&m);
        Ok((next, applied))
    }

    fn is_check(&self, position: &Chess) -> bool {
        position.is_check()
    }

    fn is_checkmate(&self, position: &Chess) -> bool {
        position.is_checkmate()
    }

    fn has_en_passant_opportunity(&self, position: &Chess) -> bool {
        position.ep_square(EnPassantMode::Legal).is_some()
    }

    fn piece_count(&self, position: &Chess) -> usize {
        position.board().occupied().count()
    }
}

fn describe(m: &Move, side: Color) -> AppliedMove {
    match *m {
        Move::Castle { king, rook } => {
            let castle = if king < rook {
                CastlingSide::KingSide
            } else {
                CastlingSide::QueenSide
            };
            AppliedMove {
                from: king,
                to: castle.king_to(side),
                promotion: None,
                rook_to: Some(castle.rook_to(side)),
            }
        }
        Move::Normal {
            from,
            to,
            promotion,
            ..
        } => AppliedMove {
            from,
            to,
            promotion,
            rook_to: None,
        },
        Move::EnPassant { from, to } => AppliedMove {
            from,
            to,
            promotion: None,
            rook_to: None,
        },
        Move::Put { to, .. } => AppliedMove {
            from: to,
            to,
            promotion: None,
            rook_to: None,
        },
    }
}

/// Rewrites castling written with zeros, as in `0-0` or `0-0-0+`.
fn castle_with_letters(notation: &str) -> Cow<'_, str> {
    for (zeros, letters) in [("0-0-0", "O-O-O"), ("0-0", "O-O")] {
        if let Some(rest) = notation.strip_prefix(zeros) {
            return Cow::Owned(format!("{}{}", letters, rest));
        }
    }
    Cow::Borrowed(notation)
}

pub(crate) fn side_name(side: Color) -> &'static str {
    match side {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(position: &Chess, notation: &str) -> (Chess, AppliedMove) {
        let side = StandardChess.side_to_move(position);
        StandardChess.apply(position, notation, side).unwrap()
    }

    #[test]
    fn applies_move_for_side_to_move() {
        let start = StandardChess.initial_position();
        let (after, applied) = play(&start, "e4");
        assert_eq!(applied.from, Square::E2);
        assert_eq!(applied.to, Square::E4);
        assert_eq!(applied.promotion, None);
        assert_eq!(StandardChess.side_to_move(&after), Color::Black);
        assert_eq!(StandardChess.piece_count(&after), 32);
    }

    #[test]
    fn applies_move_for_same_side_twice() {
        let start = StandardChess.initial_position();
        let (after_e4, _) = play(&start, "e4");
        let (after_nf3, applied) = StandardChess
            .apply(&after_e4, "Nf3", Color::White)
            .unwrap();
        assert_eq!(applied.from, Square::G1);
        assert_eq!(applied.to, Square::F3);
        assert_eq!(StandardChess.side_to_move(&after_nf3), Color::Black);
    }

    #[test]
    fn input_position_is_untouched() {
        let start = StandardChess.initial_position();
        let fen_before = StandardChess.to_fen(&start);
        let _ = play(&start, "d4");
        assert_eq!(StandardChess.to_fen(&start), fen_before);
    }

    #[test]
    fn rejects_illegal_move() {
        let start = StandardChess.initial_position();
        let result = StandardChess.apply(&start, "e5", Color::White);
        assert!(matches!(
            result,
            Err(TurnError::IllegalChessMove { ref notation, .. }) if notation == "e5"
        ));
    }

    #[test]
    fn rejects_unreadable_notation() {
        let start = StandardChess.initial_position();
        let result = StandardChess.apply(&start, "zz9", Color::White);
        assert!(matches!(result, Err(TurnError::IllegalChessMove { .. })));
    }

    #[test]
    fn castle_reports_king_and_rook_landing_squares() {
        let position = StandardChess
            .from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .unwrap();

        let (_, short) = play(&position, "O-O");
        assert_eq!(short.from, Square::E1);
        assert_eq!(short.to, Square::G1);
        assert_eq!(short.rook_to, Some(Square::F1));

        let (_, long) = play(&position, "O-O-O");
        assert_eq!(long.to, Square::C1);
        assert_eq!(long.rook_to, Some(Square::D1));

        let (_, black_short) = StandardChess.apply(&position, "O-O", Color::Black).unwrap();
        assert_eq!(black_short.to, Square::G8);
        assert_eq!(black_short.rook_to, Some(Square::F8));

        let (_, black_long) = StandardChess
            .apply(&position, "O-O-O", Color::Black)
            .unwrap();
        assert_eq!(black_long.to, Square::C8);
        assert_eq!(black_long.rook_to, Some(Square::D8));
    }

    #[test]
    fn castle_accepts_zeros() {
        let position = StandardChess
            .from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .unwrap();

        let (_, short) = play(&position, "0-0");
        assert_eq!(short.to, Square::G1);
        assert_eq!(short.rook_to, Some(Square::F1));

        let (_, long) = play(&position, "0-0-0");
        assert_eq!(long.to, Square::C1);
        assert_eq!(long.rook_to, Some(Square::D1));
    }

    #[test]
    fn castle_with_letters_keeps_suffix() {
        assert_eq!(castle_with_letters("0-0"), "O-O");
        assert_eq!(castle_with_letters("0-0-0+"), "O-O-O+");
        assert_eq!(castle_with_letters("O-O"), "O-O");
        assert_eq!(castle_with_letters("Nf3"), "Nf3");
    }

    #[test]
    fn promotion_is_reported() {
        let position = StandardChess
            .from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1")
            .unwrap();
        let (_, applied) = play(&position, "a8=Q");
        assert_eq!(applied.promotion, Some(Role::Queen));
    }

    #[test]
    fn fen_round_trip_of_start_position() {
        let start = StandardChess.initial_position();
        assert_eq!(
            StandardChess.to_fen(&start),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn rejects_bad_fen() {
        assert!(StandardChess.from_fen("not a fen").is_err());
    }
}

//! Turn-shape rules for Two Move Chess.
//!
//! In Two Move Chess a player normally moves twice per turn. A forcing move
//! (check, checkmate, capture, promotion, or a pawn push that allows an en
//! passant capture) ends the turn on its own, and the opponent must then reply
//! with exactly one move. The game's first turn is also a single move.
//!
//! This crate provides:
//! - [`Replay`] - a game session that validates turns one at a time
//! - [`MoveType`] and [`TurnToken`] - the turn vocabulary
//! - [`forcing_reason`] / [`is_forcing`] - forcing-move detection
//! - [`MoveApplier`] - the seam to the chess rules, with [`StandardChess`]
//!   backed by `shakmaty`
//!
//! # Example
//!
//! ```
//! use two_move_chess::{MoveType, Replay, TurnError};
//!
//! let mut replay = Replay::new();
//! replay.play(["e4", "e5,Nc6", "Nf3,Bc4"]).unwrap();
//! assert_eq!(replay.last_move_type(), MoveType::DoubleMove);
//!
//! // A quiet move cannot be played alone.
//! let err = replay.play_turn("Nf6").unwrap_err();
//! assert!(matches!(err.kind(), TurnError::InvalidSingleMove { .. }));
//! ```

mod applier;
mod error;
mod forcing;
mod handlers;
mod record;
mod replay;
mod turn;

pub use applier::{AppliedMove, MoveApplier, StandardChess};
pub use error::{FenError, ReplayError, TurnError};
pub use forcing::{forcing_reason, is_forcing, ForcingReason};
pub use record::{MoveRecord, PlayedTurn};
pub use replay::Replay;
pub use turn::{MoveType, TurnToken, MOVE_SEPARATOR};

pub use shakmaty;

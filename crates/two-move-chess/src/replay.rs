//! The replay session and its turn-type state machine.
//!
//! A [`Replay`] owns everything a game needs between turns: the position,
//! the move and turn history, and the type of the last move. Turns are fed in
//! order with [`Replay::play_turn`]; the first violation is returned and the
//! session is left where the violation happened. Nothing is rolled back.

use crate::applier::{side_name, MoveApplier, StandardChess};
use crate::error::{FenError, ReplayError, TurnError};
use crate::forcing::{forcing_reason, ForcingReason};
use crate::record::{MoveRecord, PlayedTurn};
use crate::turn::{MoveType, TurnToken};
use shakmaty::Color;

/// A game of Two Move Chess being replayed.
#[derive(Debug, Clone)]
pub struct Replay<R: MoveApplier = StandardChess> {
    rules: R,
    position: R::Position,
    /// Pieces on the board before the first recorded move.
    initial_piece_count: usize,
    records: Vec<MoveRecord>,
    turns: Vec<PlayedTurn>,
    last_move_type: MoveType,
}

impl Default for Replay<StandardChess> {
    fn default() -> Self {
        Self::new()
    }
}

impl Replay<StandardChess> {
    /// Creates a replay of a game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(StandardChess)
    }
}

impl<R: MoveApplier> Replay<R> {
    /// Creates a replay from the starting position of `rules`.
    #[must_use]
    pub fn with_rules(rules: R) -> Self {
        let position = rules.initial_position();
        Self::from_position(rules, position, MoveType::StartOfGame)
    }

    /// Creates a replay from an arbitrary position.
    ///
    /// `last_move_type` is the type of the move that led to `position`.
    #[must_use]
    pub fn from_position(rules: R, position: R::Position, last_move_type: MoveType) -> Self {
        let initial_piece_count = rules.piece_count(&position);
        Replay {
            rules,
            position,
            initial_piece_count,
            records: Vec::new(),
            turns: Vec::new(),
            last_move_type,
        }
    }

    /// Creates a replay from a FEN position.
    ///
    /// The position is treated as if reached by a double move, so the side to
    /// move may play either a double or a single move.
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] if `fen` is unreadable or not a legal position.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_move_chess::{MoveType, Replay, StandardChess};
    ///
    /// let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3";
    /// let mut replay = Replay::from_fen(StandardChess, fen).unwrap();
    /// assert_eq!(replay.play_turn("Nf6,Bc5").unwrap(), MoveType::DoubleMove);
    /// ```
    pub fn from_fen(rules: R, fen: &str) -> Result<Self, FenError> {
        let position = rules.from_fen(fen).map_err(FenError)?;
        Ok(Self::from_position(rules, position, MoveType::DoubleMove))
    }

    /// Returns the rules this replay consults.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> &R::Position {
        &self.position
    }

    /// Returns the current position as FEN.
    #[must_use]
    pub fn fen(&self) -> String {
        self.rules.to_fen(&self.position)
    }

    /// Returns the side to move.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.rules.side_to_move(&self.position)
    }

    /// Returns the type of the most recently applied move.
    #[must_use]
    pub fn last_move_type(&self) -> MoveType {
        self.last_move_type
    }

    /// Returns every applied move, oldest first.
    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Returns every accepted turn, oldest first.
    #[must_use]
    pub fn turns(&self) -> &[PlayedTurn] {
        &self.turns
    }

    /// Plays every turn in order, stopping at the first violation.
    pub fn play<I, S>(&mut self, turns: I) -> Result<(), ReplayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in turns {
            self.play_turn(token.as_ref())?;
        }
        Ok(())
    }

    /// Plays one turn and returns the type it was played as.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] carrying the index of this turn, the token,
    /// and the violation. The position keeps any move that was applied before
    /// the violation was found.
    pub fn play_turn(&mut self, token: &str) -> Result<MoveType, ReplayError> {
        let index = self.turns.len();
        let side = self.side_to_move();

        match self.dispatch(token) {
            Ok(()) => {
                debug_assert!(self.last_move_type.is_turn_boundary());
                tracing::debug!("{:<9} {}", token, self.last_move_type);
                self.turns.push(PlayedTurn {
                    token: token.to_string(),
                    side,
                    move_type: self.last_move_type,
                });
                Ok(self.last_move_type)
            }
            Err(kind) => {
                tracing::debug!("Rejected turn {} ({}): {}", index + 1, token, kind);
                Err(ReplayError {
                    index,
                    token: token.to_string(),
                    kind,
                })
            }
        }
    }

    fn dispatch(&mut self, token: &str) -> Result<(), TurnError> {
        let token: TurnToken = token.parse()?;
        let last = self.last_move_type;
        if !last.is_turn_boundary() && !last.requires_response() {
            return Err(TurnError::InvalidState(last));
        }
        match token {
            TurnToken::Single(only) if last.requires_response() => self.response_move_turn(&only),
            TurnToken::Double(..) if last.requires_response() => {
                Err(TurnError::IllegalTurnShape { after: last })
            }
            TurnToken::Double(first, second) => self.double_move_turn(&first, &second),
            TurnToken::Single(only) => self.single_move_turn(&only),
        }
    }

    /// Applies one move as `side` and records it as `move_type`.
    pub(crate) fn push_move(
        &mut self,
        notation: &str,
        side: Color,
        move_type: MoveType,
    ) -> Result<(), TurnError> {
        let (position, applied) = self.rules.apply(&self.position, notation, side)?;
        let piece_count = self.rules.piece_count(&position);
        debug_assert!(piece_count <= self.piece_count());

        tracing::trace!("{} plays {} as {}", side_name(side), notation, move_type);
        self.position = position;
        self.records.push(MoveRecord::new(
            notation,
            side,
            move_type,
            applied,
            piece_count,
        ));
        self.last_move_type = move_type;
        Ok(())
    }

    /// Returns why the last applied move was forcing, if it was.
    pub(crate) fn last_forcing_reason(&self) -> Option<ForcingReason> {
        let (last, earlier) = self.records.split_last()?;
        let count_before = earlier
            .last()
            .map_or(self.initial_piece_count, |r| r.piece_count);
        forcing_reason(&self.rules, &self.position, count_before, last)
    }

    /// Pieces on the board now.
    fn piece_count(&self) -> usize {
        self.records
            .last()
            .map_or(self.initial_piece_count, |r| r.piece_count)
    }
}

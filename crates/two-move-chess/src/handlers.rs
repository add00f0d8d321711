//! Turn handlers: double, single and response turns.
//!
//! Each handler applies its move(s) left to right through the session and
//! then checks the shape rules for that kind of turn. A rejected turn is not
//! undone.

use crate::applier::MoveApplier;
use crate::error::TurnError;
use crate::replay::Replay;
use crate::turn::MoveType;

impl<R: MoveApplier> Replay<R> {
    /// Two moves by the side to move.
    ///
    /// The first move must be quiet, and the second must move a different
    /// piece. After a castle the rook counts as moved too.
    pub(crate) fn double_move_turn(&mut self, first: &str, second: &str) -> Result<(), TurnError> {
        let side = self.side_to_move();

        self.push_move(first, side, MoveType::DoubleHalf)?;
        if let Some(reason) = self.last_forcing_reason() {
            return Err(TurnError::InvalidDoubleMove {
                notation: first.to_string(),
                reason,
            });
        }

        self.push_move(second, side, MoveType::DoubleMove)?;
        if let [.., first_half, second_half] = self.records() {
            if second_half.from == first_half.to || Some(second_half.from) == first_half.rook_to {
                return Err(TurnError::RepeatedPieceMove);
            }
        }
        Ok(())
    }

    /// One move that must be forcing.
    pub(crate) fn single_move_turn(&mut self, only: &str) -> Result<(), TurnError> {
        let side = self.side_to_move();
        self.push_move(only, side, MoveType::SingleMove)?;
        match self.last_forcing_reason() {
            Some(reason) => {
                tracing::trace!("{} is forcing: {}", only, reason);
                Ok(())
            }
            None => Err(TurnError::InvalidSingleMove {
                notation: only.to_string(),
            }),
        }
    }

    /// One move of any kind.
    pub(crate) fn response_move_turn(&mut self, only: &str) -> Result<(), TurnError> {
        let side = self.side_to_move();
        self.push_move(only, side, MoveType::ResponseMove)
    }
}

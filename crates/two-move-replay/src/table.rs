//! Turn-by-turn tables of a replayed game.
//!
//! Two layouts are supported: the HTML table used by chessvariants.com, and
//! a JSON document for other tools.

use askama::Template;
use serde::Serialize;
use shakmaty::Color;
use two_move_chess::{MoveType, PlayedTurn};

/// One player's turn in a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnCell {
    pub token: String,
    pub move_type: MoveType,
}

impl TurnCell {
    /// Returns true if the turn was a lone forcing move.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.move_type == MoveType::SingleMove
    }

    /// Returns true if the turn answered a single move or opened the game.
    #[must_use]
    pub fn is_response(&self) -> bool {
        self.move_type == MoveType::ResponseMove
    }
}

/// A full turn: White's turn and Black's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRow {
    /// Turn number as printed in the game record, starting at 1.
    pub number: usize,
    pub white: Option<TurnCell>,
    pub black: Option<TurnCell>,
}

/// JSON representation of a replayed game.
#[derive(Debug, Serialize)]
struct GameJson<'a> {
    turns: &'a [TurnRow],
    /// Final position.
    fen: &'a str,
}

/// Groups accepted turns into full-turn rows.
#[must_use]
pub fn turn_rows(turns: &[PlayedTurn]) -> Vec<TurnRow> {
    let mut rows: Vec<TurnRow> = Vec::new();
    for turn in turns {
        let cell = TurnCell {
            token: turn.token.clone(),
            move_type: turn.move_type,
        };
        match turn.side {
            Color::White => rows.push(TurnRow {
                number: rows.len() + 1,
                white: Some(cell),
                black: None,
            }),
            Color::Black => match rows.last_mut() {
                Some(row) if row.black.is_none() => row.black = Some(cell),
                _ => rows.push(TurnRow {
                    number: rows.len() + 1,
                    white: None,
                    black: Some(cell),
                }),
            },
        }
    }
    rows
}

/// Turn table in the layout used by chessvariants.com.
///
/// Single moves are bold, response moves bold italic, double moves plain.
#[derive(Template)]
#[template(path = "turn_table.html")]
pub struct TurnTableTemplate<'a> {
    pub rows: &'a [TurnRow],
}

/// Renders the rows as an HTML table.
///
/// # Errors
///
/// Returns an [`askama::Error`] if the template fails to render.
pub fn html_table(rows: &[TurnRow]) -> askama::Result<String> {
    TurnTableTemplate { rows }.render()
}

/// Renders the rows and final position as pretty-printed JSON.
pub fn json_table(rows: &[TurnRow], fen: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GameJson { turns: rows, fen })
}

//! Replaying a game file and emitting snapshots.
//!
//! A `.pgn` file is replayed turn by turn, stopping at every checkpoint to
//! show the board. A `.fen` file is loaded and shown once.

use crate::checkpoint::{schedule, Checkpoint};
use crate::error::RunError;
use crate::pgn::read_pgn_file;
use crate::render::{board_svg, board_text, SvgStyle, TextStyle};
use crate::table::{html_table, json_table, turn_rows};
use shakmaty::{Color, Position};
use std::io::Write;
use std::path::Path;
use two_move_chess::{Replay, StandardChess};

/// What to show while replaying.
#[derive(Debug, Clone, Default)]
pub struct ReplayOptions {
    /// Raw checkpoints, as given on the command line.
    pub checkpoints: Vec<String>,
    /// Print every turn and the type it was played as.
    pub debug: bool,
    /// Print the game as an HTML table instead of boards. Ignored with `debug`.
    pub html: bool,
    /// Print the game as JSON instead of boards. Ignored with `debug`.
    pub json: bool,
    pub text_style: TextStyle,
    pub svg_style: SvgStyle,
}

impl ReplayOptions {
    /// The debug listing takes the place of the turn tables.
    fn prints_table(&self) -> bool {
        !self.debug && (self.html || self.json)
    }
}

/// Replays or displays the game file at `path`, writing output to `out`.
///
/// # Errors
///
/// Returns [`RunError::UnsupportedInput`] for unknown file types, and
/// [`RunError::Replay`] for the first turn that breaks the rules.
pub fn run_file<W: Write>(
    path: &Path,
    options: &ReplayOptions,
    out: &mut W,
) -> Result<Replay, RunError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("pgn") => replay_pgn(path, options, out),
        Some("fen") => show_fen(path, options, out),
        _ => Err(RunError::UnsupportedInput(path.to_path_buf())),
    }
}

fn replay_pgn<W: Write>(
    path: &Path,
    options: &ReplayOptions,
    out: &mut W,
) -> Result<Replay, RunError> {
    let turns = read_pgn_file(path)?;
    let checkpoints = schedule(&options.checkpoints, turns.len())?;
    tracing::info!(
        "Replaying {} turns from {} with {} snapshots",
        turns.len(),
        path.display(),
        checkpoints.len()
    );

    let mut replay = Replay::new();
    let mut start = 0;
    for checkpoint in &checkpoints {
        for token in &turns[start..checkpoint.ply] {
            replay.play_turn(token)?;
            if options.debug {
                write!(out, "{:<9}\t{}\t", token, replay.last_move_type())?;
                if replay.side_to_move() == Color::White {
                    writeln!(out)?;
                }
            }
        }
        snapshot(&replay, checkpoint, options, out)?;
        start = checkpoint.ply;
    }

    if options.prints_table() {
        let rows = turn_rows(replay.turns());
        if options.html {
            writeln!(out, "{}", html_table(&rows)?)?;
        }
        if options.json {
            writeln!(out, "{}", json_table(&rows, &replay.fen())?)?;
        }
    }
    Ok(replay)
}

fn show_fen<W: Write>(
    path: &Path,
    options: &ReplayOptions,
    out: &mut W,
) -> Result<Replay, RunError> {
    let text = std::fs::read_to_string(path)?;
    let fen = text.lines().next().unwrap_or_default();
    let replay = Replay::from_fen(StandardChess, fen)?;

    let checkpoints = schedule(&options.checkpoints, 0)?;
    if let Some(first) = checkpoints.first() {
        let board_only = ReplayOptions {
            debug: false,
            html: false,
            json: false,
            ..options.clone()
        };
        snapshot(&replay, first, &board_only, out)?;
    }
    Ok(replay)
}

/// Shows the board at a checkpoint, on `out` or in the checkpoint's file.
fn snapshot<W: Write>(
    replay: &Replay,
    checkpoint: &Checkpoint,
    options: &ReplayOptions,
    out: &mut W,
) -> Result<(), RunError> {
    let board = replay.position().board();
    match &checkpoint.output {
        Some(file) => {
            let contents = match file.extension().and_then(|e| e.to_str()) {
                Some("svg") => format!("{}\n", board_svg(board, &options.svg_style)?),
                Some("fen") => format!("{}\n", replay.fen()),
                _ => format!("{}\n", board_text(board, options.text_style)),
            };
            std::fs::write(file, contents)?;
            tracing::debug!("Wrote board after {} turns", checkpoint.ply);
            writeln!(out, "Output file: {}", file.display())?;
        }
        None if !options.prints_table() => {
            if options.debug && replay.side_to_move() == Color::Black {
                writeln!(out)?;
            }
            writeln!(out, "{}", board_text(board, options.text_style))?;
            writeln!(out)?;
        }
        None => {}
    }
    Ok(())
}

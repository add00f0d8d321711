//! Reading Two Move Chess games from PGN files.
//!
//! The format is nearly the same as PGN for orthodox chess. The two moves of
//! a double-move turn are joined by a comma, for example `3. Nf3,Bc4 Nf6,Be7`.

use std::path::Path;
use thiserror::Error;

/// Game termination markers that may follow the last turn.
pub const RESULT_MARKERS: [&str; 4] = ["1/2-1/2", "1-0", "0-1", "*"];

/// Errors that can occur when reading a game record.
#[derive(Error, Debug)]
pub enum PgnError {
    /// Failed to read the file from disk.
    #[error("Failed to read game record: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Extracts the turn tokens from the text of a game record.
///
/// Only lines that begin with a move number (`12.`) carry turns; tag pairs
/// and blank lines are skipped. Every whitespace-separated piece after the
/// first move number is a turn token, with any embedded move number such as
/// `13.` stripped. A trailing result marker is dropped.
///
/// # Example
///
/// ```
/// use two_move_replay::pgn::read_pgn;
///
/// let turns = read_pgn("[Event \"Casual\"]\n\n1. e4 e5,Nc6 2. Nf3,Bc4 *\n");
/// assert_eq!(turns, vec!["e4", "e5,Nc6", "Nf3,Bc4"]);
/// ```
pub fn read_pgn(text: &str) -> Vec<String> {
    let mut turns: Vec<String> = text
        .lines()
        .filter_map(after_move_number)
        .flat_map(str::split_whitespace)
        .map(|piece| piece.rsplit('.').next().unwrap_or(piece))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if turns
        .last()
        .is_some_and(|last| RESULT_MARKERS.contains(&last.as_str()))
    {
        turns.pop();
    }
    turns
}

/// Reads the turn tokens from a game record on disk.
///
/// # Errors
///
/// Returns [`PgnError::ReadError`] if the file cannot be read.
pub fn read_pgn_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PgnError> {
    let text = std::fs::read_to_string(path)?;
    Ok(read_pgn(&text))
}

/// Returns the rest of `line` after a leading `<digits>.`, if it has one.
fn after_move_number(line: &str) -> Option<&str> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_turns_across_lines() {
        let text = "\
[Event \"Two Move Chess\"]
[Result \"1-0\"]

1. e4 e5,Nc6
2. Nf3,Bc4 Nf6,Be7
3. O-O,d3 1-0
";
        assert_eq!(
            read_pgn(text),
            vec!["e4", "e5,Nc6", "Nf3,Bc4", "Nf6,Be7", "O-O,d3"]
        );
    }

    #[test]
    fn test_strips_inline_move_numbers() {
        assert_eq!(
            read_pgn("1.e4 e5,Nc6 2.Nf3,Bc4 Nf6,Be7"),
            vec!["e4", "e5,Nc6", "Nf3,Bc4", "Nf6,Be7"]
        );
        assert_eq!(read_pgn("1. e4 1...d5,Nf6"), vec!["e4", "d5,Nf6"]);
    }

    #[test]
    fn test_strips_each_result_marker() {
        for marker in RESULT_MARKERS {
            let text = format!("1. e4 d5,Nf6 {}", marker);
            assert_eq!(read_pgn(&text), vec!["e4", "d5,Nf6"], "marker {}", marker);
        }
    }

    #[test]
    fn test_only_final_marker_is_removed() {
        assert_eq!(read_pgn("1. e4"), vec!["e4"]);
    }

    #[test]
    fn test_ignores_lines_without_move_number() {
        let text = "e4 e5\n[Site \"local\"]\n1. d4\n";
        assert_eq!(read_pgn(text), vec!["d4"]);
    }

    #[test]
    fn test_empty_record() {
        assert!(read_pgn("").is_empty());
        assert!(read_pgn("[Event \"Nothing\"]\n").is_empty());
    }

    #[test]
    fn test_read_pgn_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "1. e4 e5,Nc6").expect("Failed to write temp file");
        writeln!(file, "2. Nf3,Bc4 *").expect("Failed to write temp file");

        let turns = read_pgn_file(file.path()).expect("Failed to read PGN file");
        assert_eq!(turns, vec!["e4", "e5,Nc6", "Nf3,Bc4"]);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_pgn_file("/nonexistent/game.pgn");
        assert!(matches!(result, Err(PgnError::ReadError(_))));
    }
}

//! End-to-end replays of game files.

use std::path::{Path, PathBuf};
use two_move_chess::{ForcingReason, MoveType, TurnError};
use two_move_replay::render::TextStyle;
use two_move_replay::{check_violations, run_file, ReplayOptions, RunError};

const GAME: &str = "\
[Event \"Casual game\"]
[White \"A\"]
[Black \"B\"]

1. e4 d5,Nf6
2. exd5 Nxd5
3. Nc3,Nf3 Nxc3
4. dxc3 e6,Be7
5. Bd3,O-O *
";

fn violations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../violations")
}

#[test]
fn test_bundled_violations_are_all_detected() {
    let mut out = Vec::new();
    let checked = check_violations(&violations_dir(), true, &mut out).unwrap();
    assert_eq!(checked, 9);

    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("01-double-first-turn.pgn"));
    assert!(report.contains("09-en-passant-in-double-move.pgn"));
}

#[test]
fn test_full_game_with_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join("game.pgn");
    std::fs::write(&game, GAME).unwrap();
    let middle = dir.path().join("middle.svg");
    let last = dir.path().join("last.txt");

    let options = ReplayOptions {
        checkpoints: vec![
            format!("2.5:{}", middle.display()),
            format!("end:{}", last.display()),
            "1".to_string(),
            "40".to_string(),
        ],
        text_style: TextStyle::Unicode,
        ..ReplayOptions::default()
    };
    let mut out = Vec::new();
    let replay = run_file(&game, &options, &mut out).unwrap();

    assert_eq!(replay.turns().len(), 9);
    assert_eq!(replay.last_move_type(), MoveType::DoubleMove);
    assert_eq!(
        replay.records().iter().map(|r| r.piece_count).min(),
        Some(28)
    );

    let output = String::from_utf8(out).unwrap();
    // Turn 1 on screen, the others in files, turn 40 dropped.
    assert_eq!(output.matches("Output file:").count(), 2);
    assert!(std::fs::read_to_string(&middle).unwrap().contains("<rect"));
    assert_eq!(std::fs::read_to_string(&last).unwrap().lines().count(), 8);
}

#[test]
fn test_turn_types_in_json() {
    let dir = tempfile::tempdir().unwrap();
    let game = dir.path().join("game.pgn");
    std::fs::write(&game, GAME).unwrap();

    let options = ReplayOptions {
        json: true,
        ..ReplayOptions::default()
    };
    let mut out = Vec::new();
    run_file(&game, &options, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let turns = value["turns"].as_array().unwrap();
    assert_eq!(turns.len(), 5);
    assert_eq!(turns[1]["white"]["move_type"], "single_move");
    assert_eq!(turns[1]["black"]["move_type"], "response_move");
    assert_eq!(turns[2]["black"]["move_type"], "single_move");
    assert_eq!(turns[3]["white"]["move_type"], "response_move");
    assert_eq!(turns[4]["black"], serde_json::Value::Null);
}

#[test]
fn test_violation_names_the_turn() {
    let path = violations_dir().join("04-check-in-double-move.pgn");
    let err = run_file(&path, &ReplayOptions::default(), &mut std::io::sink()).unwrap_err();
    match err {
        RunError::Replay(err) => {
            assert_eq!(err.index, 2);
            assert_eq!(err.token, "Qh5+,Nf3");
            assert_eq!(
                err.kind(),
                &TurnError::InvalidDoubleMove {
                    notation: "Qh5+".to_string(),
                    reason: ForcingReason::Check,
                }
            );
            assert!(err.to_string().starts_with("turn 3 (Qh5+,Nf3): "));
        }
        other => panic!("Expected a replay error, got {}", other),
    }
}

#[test]
fn test_fen_position_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let position = dir.path().join("position.fen");
    let copy = dir.path().join("copy.fen");
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3";
    std::fs::write(&position, format!("{}\n", fen)).unwrap();

    let options = ReplayOptions {
        checkpoints: vec![format!("end:{}", copy.display())],
        ..ReplayOptions::default()
    };
    let mut out = Vec::new();
    run_file(&position, &options, &mut out).unwrap();

    assert_eq!(std::fs::read_to_string(&copy).unwrap().trim_end(), fen);
    assert!(String::from_utf8(out).unwrap().starts_with("Output file:"));
}

#[test]
fn test_invalid_fen_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let position = dir.path().join("broken.fen");
    std::fs::write(&position, "not a position\n").unwrap();

    let err = run_file(&position, &ReplayOptions::default(), &mut std::io::sink()).unwrap_err();
    assert!(matches!(err, RunError::Fen(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(
        &dir.path().join("absent.pgn"),
        &ReplayOptions::default(),
        &mut std::io::sink(),
    )
    .unwrap_err();
    assert!(matches!(err, RunError::Pgn(_)));
}

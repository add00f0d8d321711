//! Two Move Chess replay tool.
//!
//! This crate reads recorded games of Two Move Chess, replays them through
//! the turn validator in `two-move-chess`, and renders the board and the
//! game record along the way.
//!
//! # Modules
//!
//! - [`pgn`] - Reading turn tokens from game records
//! - [`checkpoint`] - Scheduling board snapshots during a replay
//! - [`render`] - Text and SVG boards
//! - [`table`] - HTML and JSON turn tables
//! - [`run`] - Replaying a game file
//! - [`violations`] - Checking that broken games are rejected
//! - [`config`] - `two-move.toml` settings

pub mod checkpoint;
pub mod config;
pub mod error;
pub mod pgn;
pub mod render;
pub mod run;
pub mod table;
pub mod violations;

pub use error::RunError;
pub use run::{run_file, ReplayOptions};
pub use violations::check_violations;

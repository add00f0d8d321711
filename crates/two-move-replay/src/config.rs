//! Configuration file loading for the replay tool.
//!
//! Settings are read from `two-move.toml` in the current directory. Every
//! key is optional, and a missing file means all defaults.

use crate::render::{SvgStyle, TextStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Replay tool configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReplayConfig {
    /// Print boards with chess glyphs instead of letters.
    pub unicode: bool,
    /// Width and height of SVG boards, in pixels.
    pub board_size: u32,
    /// Directory of games that must all be rejected.
    pub violations_dir: PathBuf,
    /// SVG fill for light squares.
    pub light_square: String,
    /// SVG fill for dark squares.
    pub dark_square: String,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        let svg = SvgStyle::default();
        ReplayConfig {
            unicode: false,
            board_size: svg.size,
            violations_dir: PathBuf::from("violations"),
            light_square: svg.light_square,
            dark_square: svg.dark_square,
        }
    }
}

impl ReplayConfig {
    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// Returns the default configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        PathBuf::from("two-move.toml")
    }

    /// Returns how text boards are drawn.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        if self.unicode {
            TextStyle::Unicode
        } else {
            TextStyle::Ascii
        }
    }

    /// Returns the size and colors of SVG boards.
    #[must_use]
    pub fn svg_style(&self) -> SvgStyle {
        SvgStyle {
            size: self.board_size,
            light_square: self.light_square.clone(),
            dark_square: self.dark_square.clone(),
        }
    }
}

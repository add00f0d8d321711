//! Board rendering: text for the terminal and SVG for files.

use askama::Template;
use shakmaty::{Board, Color, Piece, Role, Square};

/// How to draw pieces on a text board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// FEN letters, uppercase for White.
    #[default]
    Ascii,
    /// Chess glyphs with colors inverted, for dark terminals.
    Unicode,
}

/// Colors and size of an SVG board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgStyle {
    /// Width and height in pixels.
    pub size: u32,
    pub light_square: String,
    pub dark_square: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            size: 400,
            light_square: "#f0d9b5".to_string(),
            dark_square: "#b58863".to_string(),
        }
    }
}

/// Draws the board as eight lines of text, rank 8 first.
#[must_use]
pub fn board_text(board: &Board, style: TextStyle) -> String {
    (0..8u32)
        .rev()
        .map(|rank| {
            (0..8u32)
                .map(|file| match board.piece_at(Square::new(rank * 8 + file)) {
                    Some(piece) => match style {
                        TextStyle::Ascii => piece.char(),
                        TextStyle::Unicode => glyph(piece, true),
                    },
                    None => '.',
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A square of the SVG board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    /// Row index (0-7, where 0 is the 8th rank).
    pub row: u32,
    /// Column index (0-7, where 0 is the a-file).
    pub col: u32,
    pub light: bool,
}

/// A piece to draw on the SVG board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    /// Row index (0-7, where 0 is the 8th rank).
    pub row: u32,
    /// Column index (0-7, where 0 is the a-file).
    pub col: u32,
    /// Unicode chess symbol.
    pub symbol: char,
}

/// SVG board template.
///
/// Every square is drawn first, then the pieces on top of them.
#[derive(Template)]
#[template(path = "board.svg")]
pub struct BoardTemplate<'a> {
    /// Width and height in pixels.
    pub size: u32,
    pub light_square: &'a str,
    pub dark_square: &'a str,
    pub squares: Vec<SquareView>,
    pub pieces: Vec<PieceView>,
}

impl<'a> BoardTemplate<'a> {
    /// Builds the template for `board` drawn in `style`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shakmaty::Board;
    /// use two_move_replay::render::{BoardTemplate, SvgStyle};
    ///
    /// let style = SvgStyle::default();
    /// let template = BoardTemplate::new(&Board::default(), &style);
    /// assert_eq!(template.squares.len(), 64);
    /// assert_eq!(template.pieces.len(), 32);
    /// ```
    #[must_use]
    pub fn new(board: &Board, style: &'a SvgStyle) -> Self {
        let mut squares = Vec::with_capacity(64);
        let mut pieces = Vec::new();
        for row in 0..8u32 {
            let rank = 7 - row;
            for col in 0..8u32 {
                squares.push(SquareView {
                    row,
                    col,
                    light: (rank + col) % 2 == 1,
                });
                if let Some(piece) = board.piece_at(Square::new(rank * 8 + col)) {
                    pieces.push(PieceView {
                        row,
                        col,
                        symbol: glyph(piece, false),
                    });
                }
            }
        }
        BoardTemplate {
            size: style.size,
            light_square: &style.light_square,
            dark_square: &style.dark_square,
            squares,
            pieces,
        }
    }
}

/// Draws the board as a standalone SVG document.
///
/// # Errors
///
/// Returns an [`askama::Error`] if the template fails to render.
pub fn board_svg(board: &Board, style: &SvgStyle) -> askama::Result<String> {
    BoardTemplate::new(board, style).render()
}

/// Returns the chess glyph for `piece`.
///
/// With `inverted`, White uses the filled glyphs and Black the outlined ones.
fn glyph(piece: Piece, inverted: bool) -> char {
    let filled = (piece.color == Color::Black) != inverted;
    match (piece.role, filled) {
        (Role::King, false) => '♔',
        (Role::Queen, false) => '♕',
        (Role::Rook, false) => '♖',
        (Role::Bishop, false) => '♗',
        (Role::Knight, false) => '♘',
        (Role::Pawn, false) => '♙',
        (Role::King, true) => '♚',
        (Role::Queen, true) => '♛',
        (Role::Rook, true) => '♜',
        (Role::Bishop, true) => '♝',
        (Role::Knight, true) => '♞',
        (Role::Pawn, true) => '♟',
    }
}

//! Common types for Minesweeper: game status, explore results, cell views
//! and layout errors.

use crate::config::{EMPTY_SYMBOL, HIDDEN_SYMBOL, MARKED_SYMBOL, MINE_SYMBOL};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Outcome of exploring a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreResult {
    /// Coordinates outside the field; nothing happened.
    OutOfBounds,
    /// The cell was already open; nothing happened.
    AlreadyRevealed,
    /// A safe cell was opened, carrying how many cells the cascade revealed.
    Cleared(usize),
    /// A mine was opened.
    Detonated,
}

/// Player-visible content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Marked,
    Mine,
    /// Revealed with no neighbouring mines.
    Empty,
    /// Revealed with 1..=8 neighbouring mines.
    Number(u8),
}

impl CellView {
    /// Character used for this cell in the text rendering.
    pub fn symbol(self) -> char {
        match self {
            CellView::Hidden => HIDDEN_SYMBOL,
            CellView::Marked => MARKED_SYMBOL,
            CellView::Mine => MINE_SYMBOL,
            CellView::Empty => EMPTY_SYMBOL,
            CellView::Number(n) => char::from_digit(u32::from(n), 10).unwrap_or('?'),
        }
    }
}

/// Errors returned when building a field from an explicit mine layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A mine coordinate (1-based) lies outside the field.
    OutOfBounds { row: usize, col: usize },
    /// Every cell would hold a mine.
    NoSafeCell,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::OutOfBounds { row, col } => {
                write!(f, "Mine at row={}, col={} is outside the field", row, col)
            }
            LayoutError::NoSafeCell => write!(f, "Layout leaves no safe cell"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

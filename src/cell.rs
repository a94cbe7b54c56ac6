//! A single square of the mine field.

use crate::common::CellView;
use crate::config::MAX_ADJACENT_MINES;

/// Visibility of a cell. `Marked` still counts as unexplored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Marked,
    /// Terminal: a revealed cell never goes back.
    Revealed,
}

/// One grid unit: mine flag, visibility and the cached count of
/// neighbouring mines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    state: RevealState,
    adjacent_mines: Option<u8>,
}

impl Cell {
    /// Create a hidden, unmarked cell without a mine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a mine under this cell.
    pub fn lay_mine(&mut self) {
        self.mine = true;
    }

    pub fn is_mine(&self) -> bool {
        self.mine
    }

    pub fn is_safe(&self) -> bool {
        !self.mine
    }

    /// Store the number of neighbouring mines. Fails without touching the
    /// cell when it holds a mine or `count` exceeds eight.
    pub fn set_adjacent_mines(&mut self, count: u8) -> bool {
        if self.mine || count > MAX_ADJACENT_MINES {
            return false;
        }
        self.adjacent_mines = Some(count);
        true
    }

    /// Number of neighbouring mines, `None` until computed or for mine cells.
    pub fn adjacent_mines(&self) -> Option<u8> {
        self.adjacent_mines
    }

    pub fn has_adjacent_mines(&self) -> bool {
        self.adjacent_mines.is_some_and(|n| n > 0)
    }

    /// Flip between hidden and marked. Revealed cells refuse.
    pub fn toggle_mark(&mut self) -> bool {
        match self.state {
            RevealState::Hidden => self.state = RevealState::Marked,
            RevealState::Marked => self.state = RevealState::Hidden,
            RevealState::Revealed => return false,
        }
        true
    }

    pub fn is_marked(&self) -> bool {
        self.state == RevealState::Marked
    }

    pub fn reveal(&mut self) {
        self.state = RevealState::Revealed;
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn is_hidden(&self) -> bool {
        !self.is_revealed()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// What a player is allowed to see of this cell.
    pub fn view(&self) -> CellView {
        match self.state {
            RevealState::Hidden => CellView::Hidden,
            RevealState::Marked => CellView::Marked,
            RevealState::Revealed if self.mine => CellView::Mine,
            RevealState::Revealed => match self.adjacent_mines {
                Some(n) if n > 0 => CellView::Number(n),
                _ => CellView::Empty,
            },
        }
    }
}

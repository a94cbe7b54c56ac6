//! The mine field: cell grid, deferred mine layout, flood-fill reveal and
//! win/loss evaluation.
//!
//! Public coordinates are 1-based `(row, col)` pairs as shown to the player.
//! Cells are stored row-major in a flat vector; `Field::index` is the only
//! place where player coordinates are turned into storage indices.

use alloc::{vec, vec::Vec};
use core::fmt;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cell::Cell;
use crate::common::{CellView, ExploreResult, GameStatus, LayoutError};
use crate::config::{clamp_mines, MAX_SIDE_LENGTH};

/// Square mine field owning its cells and the generator used for layout.
#[derive(Debug, Clone)]
pub struct Field {
    side: usize,
    cells: Vec<Cell>,
    mine_count: usize,
    mines_placed: bool,
    mine_cells: Vec<usize>,
    safe_cells: Vec<usize>,
    rng: SmallRng,
}

/// Storage indices of the up-to-8 cells around `idx`, row-major, clipped at
/// the field edges.
fn neighbours(side: usize, idx: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (idx / side, idx % side);
    let last = side - 1;
    (row.saturating_sub(1)..=(row + 1).min(last))
        .flat_map(move |r| {
            (col.saturating_sub(1)..=(col + 1).min(last)).map(move |c| r * side + c)
        })
        .filter(move |&n| n != idx)
}

impl Field {
    /// Create a field whose layout generator is seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new(side_length: usize, mines: usize) -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(side_length, mines, SmallRng::from_rng(&mut seed_rng))
    }

    /// Create a field with a reproducible mine layout.
    pub fn with_seed(side_length: usize, mines: usize, seed: u64) -> Self {
        Self::with_rng(side_length, mines, SmallRng::seed_from_u64(seed))
    }

    /// Create a field that lays its mines with `rng` on the first explore.
    ///
    /// `side_length` is clamped to [`MAX_SIDE_LENGTH`] and `mines` so that
    /// at least one cell stays safe.
    pub fn with_rng(side_length: usize, mines: usize, rng: SmallRng) -> Self {
        let side = side_length.min(MAX_SIDE_LENGTH);
        Self {
            side,
            cells: vec![Cell::new(); side * side],
            mine_count: clamp_mines(side, mines),
            mines_placed: false,
            mine_cells: Vec::new(),
            safe_cells: Vec::new(),
            rng,
        }
    }

    /// Build a field with mines already laid at the given 1-based
    /// coordinates. Repeated coordinates count once.
    pub fn with_layout(side_length: usize, mines: &[(usize, usize)]) -> Result<Self, LayoutError> {
        let mut field = Self::with_seed(side_length, 0, 0);
        for &(row, col) in mines {
            let idx = field
                .index(row, col)
                .ok_or(LayoutError::OutOfBounds { row, col })?;
            field.cells[idx].lay_mine();
        }
        if field.cells.iter().all(Cell::is_mine) {
            return Err(LayoutError::NoSafeCell);
        }
        field.settle_layout();
        field.mine_count = field.mine_cells.len();
        Ok(field)
    }

    pub fn side_length(&self) -> usize {
        self.side
    }

    /// Number of mines the field holds (or will hold once laid).
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// Read-only access to the cell at a 1-based coordinate.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Player-visible content of the cell at a 1-based coordinate.
    pub fn view(&self, row: usize, col: usize) -> Option<CellView> {
        self.cell(row, col).map(Cell::view)
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_revealed()).count()
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_marked()).count()
    }

    /// Convert a 1-based coordinate into a storage index.
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let (r, c) = (row.checked_sub(1)?, col.checked_sub(1)?);
        (r < self.side && c < self.side).then_some(r * self.side + c)
    }

    /// Shuffle mines into every cell except `safe`. Runs once per field.
    fn lay_mines(&mut self, safe: usize) {
        if self.mines_placed {
            return;
        }
        let mut pool: Vec<usize> = (0..self.cells.len()).filter(|&i| i != safe).collect();
        pool.shuffle(&mut self.rng);
        for &idx in &pool[..self.mine_count] {
            self.cells[idx].lay_mine();
        }
        self.settle_layout();
        debug!(
            "laid {} mines on a {}x{} field, keeping ({}, {}) safe",
            self.mine_count,
            self.side,
            self.side,
            safe / self.side + 1,
            safe % self.side + 1
        );
    }

    /// Partition cells into mine and safe sets and cache adjacency counts.
    fn settle_layout(&mut self) {
        let (mine_cells, safe_cells): (Vec<usize>, Vec<usize>) =
            (0..self.cells.len()).partition(|&i| self.cells[i].is_mine());
        self.mine_cells = mine_cells;
        self.safe_cells = safe_cells;
        for &idx in &self.safe_cells {
            let count = neighbours(self.side, idx)
                .filter(|&n| self.cells[n].is_mine())
                .count();
            // at most eight neighbours, so this cannot fail
            let stored = self.cells[idx].set_adjacent_mines(count as u8);
            debug_assert!(stored);
        }
        self.mines_placed = true;
    }

    /// Toggle the mark on a hidden cell. Returns `false` for coordinates
    /// outside the field and for revealed cells.
    pub fn toggle_mark(&mut self, row: usize, col: usize) -> bool {
        let Some(idx) = self.index(row, col) else {
            trace!("mark ({}, {}) ignored: out of bounds", row, col);
            return false;
        };
        let cell = &mut self.cells[idx];
        if cell.is_revealed() {
            return false;
        }
        let toggled = cell.toggle_mark();
        trace!("mark ({}, {}) -> {:?}", row, col, cell.state());
        toggled
    }

    /// Open the cell at a 1-based coordinate.
    ///
    /// The first explore lays the mines around this cell, so it is always
    /// safe. Safe cells with no neighbouring mines cascade into their
    /// neighbours.
    pub fn explore(&mut self, row: usize, col: usize) -> ExploreResult {
        let Some(idx) = self.index(row, col) else {
            trace!("explore ({}, {}) ignored: out of bounds", row, col);
            return ExploreResult::OutOfBounds;
        };
        self.lay_mines(idx);
        let cell = &mut self.cells[idx];
        let result = if cell.is_revealed() {
            ExploreResult::AlreadyRevealed
        } else if cell.is_mine() {
            cell.reveal();
            ExploreResult::Detonated
        } else {
            ExploreResult::Cleared(self.auto_explore(idx))
        };
        trace!("explore ({}, {}) -> {:?}", row, col, result);
        result
    }

    /// Reveal the connected zero region around `start` and its numbered
    /// border. Returns how many cells were newly revealed.
    fn auto_explore(&mut self, start: usize) -> usize {
        let mut revealed = 0;
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            let cell = &mut self.cells[idx];
            if cell.is_mine() || cell.is_revealed() {
                continue;
            }
            cell.reveal();
            revealed += 1;
            if !cell.has_adjacent_mines() {
                stack.extend(neighbours(self.side, idx).filter(|&n| self.cells[n].is_hidden()));
            }
        }
        revealed
    }

    fn all_mines_marked(&self) -> bool {
        self.mine_cells.iter().all(|&i| self.cells[i].is_marked())
    }

    fn no_safe_marked(&self) -> bool {
        !self.safe_cells.iter().any(|&i| self.cells[i].is_marked())
    }

    fn all_safe_revealed(&self) -> bool {
        self.safe_cells.iter().all(|&i| self.cells[i].is_revealed())
    }

    fn any_mine_revealed(&self) -> bool {
        self.mine_cells.iter().any(|&i| self.cells[i].is_revealed())
    }

    /// Either every mine is marked with no false marks, or every safe cell
    /// is open.
    fn cleared(&self) -> bool {
        (self.all_mines_marked() && self.no_safe_marked()) || self.all_safe_revealed()
    }

    /// True once the field is cleared or a mine went off.
    pub fn is_game_over(&self) -> bool {
        self.mines_placed && (self.cleared() || self.any_mine_revealed())
    }

    /// True when the field is cleared and no mine was opened. Always false
    /// before the first explore.
    pub fn player_won(&self) -> bool {
        self.mines_placed && self.cleared() && !self.any_mine_revealed()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if !self.is_game_over() {
            GameStatus::InProgress
        } else if self.player_won() {
            GameStatus::Won
        } else {
            GameStatus::Lost
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side;
        let width = side.max(1).ilog10() as usize + 1;
        write!(f, "{:>width$}|", "")?;
        for col in 0..side {
            write!(f, "{}", (col + 1) % 10)?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{:-<width$}|{:-<side$}|", "", "")?;
        for (row, cells) in self.cells.chunks(side.max(1)).enumerate() {
            write!(f, "{:>width$}|", row + 1)?;
            for cell in cells {
                write!(f, "{}", cell.view().symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{:-<width$}|{:-<side$}|", "", "")
    }
}

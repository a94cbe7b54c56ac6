/// Side length of the field when none is given.
pub const DEFAULT_SIDE_LENGTH: usize = 9;
/// Largest side length a field accepts; longer sides are clamped to it.
pub const MAX_SIDE_LENGTH: usize = 255;
/// Number of mines on the default field.
pub const DEFAULT_MINES: usize = 10;
/// Upper bound of a cell's neighbouring-mine count.
pub const MAX_ADJACENT_MINES: u8 = 8;

pub const HIDDEN_SYMBOL: char = '.';
pub const MARKED_SYMBOL: char = '*';
pub const MINE_SYMBOL: char = 'X';
pub const EMPTY_SYMBOL: char = '/';

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "MINESWEEPER_LOG";

/// Clamp a requested mine count so at least one cell stays safe.
pub const fn clamp_mines(side_length: usize, requested: usize) -> usize {
    let cells = side_length.saturating_mul(side_length);
    let max = cells.saturating_sub(1);
    if requested < max {
        requested
    } else {
        max
    }
}

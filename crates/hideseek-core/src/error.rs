use std::fmt;

use crate::geom::Cell;

/// Errors raised when building or querying a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Rows or columns were not positive, or `rows × cols` does not fit an
    /// `i32`.
    InvalidSize { rows: i32, cols: i32 },
    /// A serialized board carries the wrong number of cell flags.
    CellCount { expected: usize, found: usize },
    /// A cell outside `[0, rows) × [0, cols)` was referenced.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
    /// A board picture has lines of different widths.
    InconsistentRows(String),
    /// A board picture contains a character other than `.` or `#`.
    InvalidRune { ch: char, cell: Cell },
    /// A barrier anchored in the last column would stick out of the board.
    BarrierOffEdge(Cell),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => {
                write!(f, "board: invalid size {rows}x{cols}")
            }
            Self::CellCount { expected, found } => {
                write!(f, "board: expected {expected} cells, found {found}")
            }
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "board: cell {cell} outside {rows}x{cols} board")
            }
            Self::InconsistentRows(s) => write!(f, "board: inconsistent row widths:\n{s}"),
            Self::InvalidRune { ch, cell } => {
                write!(f, "board contains invalid rune \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::BarrierOffEdge(cell) => {
                write!(f, "board: barrier at {cell} would extend past the last column")
            }
        }
    }
}

impl std::error::Error for BoardError {}

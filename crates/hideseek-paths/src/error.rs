use std::fmt;

use hideseek_core::Cell;

/// Caller contract violations detected by the [`PathCostEngine`](crate::PathCostEngine).
///
/// An unreachable goal is not an error; it is reported as
/// [`Distance::Unreachable`](crate::Distance::Unreachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A start, goal or current cell lies outside the pather's grid.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
    /// A query over a goal set was given no goals.
    EmptyGoals,
    /// The pather reports a grid the engine cannot index.
    InvalidBounds { rows: i32, cols: i32 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "paths: cell {cell} outside {rows}x{cols} board")
            }
            Self::EmptyGoals => f.write_str("paths: empty goal set"),
            Self::InvalidBounds { rows, cols } => {
                write!(f, "paths: cannot search a {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for PathError {}

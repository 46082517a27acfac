//! The playing field: dimensions plus a set of blocked cells.

use std::fmt;

use crate::error::BoardError;
use crate::geom::Cell;

/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 8;
/// Default number of columns.
pub const DEFAULT_COLS: i32 = 8;

/// A rectangular board of `rows × cols` cells, some of which may be blocked.
///
/// Blocked cells are stored densely (one flag per cell, row-major). The board
/// knows nothing about players or the hider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            blocked: vec![false; (DEFAULT_ROWS * DEFAULT_COLS) as usize],
        }
    }
}

// Unchecked serialized form; only reaches callers through `Board::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    rows: i32,
    cols: i32,
    blocked: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, BoardError> {
        let mut board = Board::new(raw.rows, raw.cols)?;
        if raw.blocked.len() != board.len() {
            return Err(BoardError::CellCount {
                expected: board.len(),
                found: raw.blocked.len(),
            });
        }
        board.blocked = raw.blocked;
        Ok(board)
    }
}

impl Board {
    /// Create an obstacle-free board. Both dimensions must be positive and
    /// the cell count must fit an `i32`.
    pub fn new(rows: i32, cols: i32) -> Result<Self, BoardError> {
        let len = match rows.checked_mul(cols) {
            Some(n) if rows > 0 && cols > 0 => n as usize,
            _ => return Err(BoardError::InvalidSize { rows, cols }),
        };
        Ok(Self {
            rows,
            cols,
            blocked: vec![false; len],
        })
    }

    /// Parse a board from a picture where `.` is an open cell and `#` a
    /// blocked one. Every line must have the same width.
    ///
    /// ```
    /// use hideseek_core::{Board, Cell};
    ///
    /// let b = Board::from_ascii("..#\n...").unwrap();
    /// assert_eq!((b.rows(), b.cols()), (2, 3));
    /// assert!(b.is_blocked(Cell::new(0, 2)));
    /// ```
    pub fn from_ascii(picture: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        let mut board = Self::new(rows, cols)?;

        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(BoardError::InconsistentRows(picture.to_string()));
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match ch {
                    '.' => {}
                    '#' => board.block(cell)?,
                    _ => return Err(BoardError::InvalidRune { ch, cell }),
                }
            }
        }
        Ok(board)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether the board has no cells. Never true for a constructed board.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `cell` lies within `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Return an error unless `cell` is on the board.
    pub fn check(&self, cell: Cell) -> Result<(), BoardError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[inline]
    fn idx(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| (cell.row * self.cols + cell.col) as usize)
    }

    /// Whether `cell` is blocked. Off-board cells are reported as not blocked;
    /// use [`is_open`](Self::is_open) to test whether a cell can be entered.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.idx(cell).is_some_and(|i| self.blocked[i])
    }

    /// Whether `cell` is on the board and not blocked.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.idx(cell).is_some_and(|i| !self.blocked[i])
    }

    /// Mark `cell` as blocked.
    pub fn block(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.check(cell)?;
        let i = (cell.row * self.cols + cell.col) as usize;
        self.blocked[i] = true;
        Ok(())
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        self.blocked.fill(false);
    }

    /// The two cells a barrier anchored at `anchor` would cover: the anchor
    /// and its right-hand neighbour. Fails when the anchor is off the board
    /// or sits in the last column.
    pub fn barrier_cells(&self, anchor: Cell) -> Result<[Cell; 2], BoardError> {
        self.check(anchor)?;
        if anchor.col >= self.cols - 1 {
            return Err(BoardError::BarrierOffEdge(anchor));
        }
        Ok([anchor, Cell::new(anchor.row, anchor.col + 1)])
    }

    /// Block the two cells of a barrier anchored at `anchor` and return them.
    pub fn place_barrier(&mut self, anchor: Cell) -> Result<[Cell; 2], BoardError> {
        let cells = self.barrier_cells(anchor)?;
        for c in cells {
            self.block(c)?;
        }
        Ok(cells)
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        (0..self.len() as i32).map(move |i| Cell::new(i / cols, i % cols))
    }

    /// Iterate over the blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&c| self.is_blocked(c))
    }

    /// Iterate over the open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&c| !self.is_blocked(c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = if self.is_blocked(Cell::new(r, c)) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            if r < self.rows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

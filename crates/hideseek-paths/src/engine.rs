use hideseek_core::{Board, Cell};

use crate::error::PathError;
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathCostEngine
// ---------------------------------------------------------------------------

/// Answers distance, feedback and next-step questions on a grid.
///
/// The engine owns only scratch space (a node array stamped with a
/// generation counter and a neighbor buffer). Every query bumps the
/// generation, so nothing learned by one query leaks into the next and the
/// answers are a pure function of the pather, start and goals. Obstacles and
/// the grid size are supplied per query through the [`Pather`] argument; the
/// node array follows the size of the pather it is queried with.
pub struct PathCostEngine {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl PathCostEngine {
    /// Create an engine with scratch space for a `rows × cols` grid.
    /// Invalid dimensions give an empty engine; the first query sizes it.
    pub fn new(rows: i32, cols: i32) -> Self {
        let mut engine = Self {
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            generation: 0,
            nbuf: Vec::with_capacity(4),
        };
        if engine.resize(rows, cols).is_err() {
            log::debug!("engine left empty for a {rows}x{cols} grid");
        }
        engine
    }

    /// Create an engine sized for `board`.
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.rows(), board.cols())
    }

    /// Change the grid dimensions.
    ///
    /// If the new size fits within the existing node array it is kept and
    /// only the generation is bumped; otherwise the array is reallocated.
    pub(crate) fn resize(&mut self, rows: i32, cols: i32) -> Result<(), PathError> {
        let new_len = match rows.checked_mul(cols) {
            Some(n) if rows >= 0 && cols >= 0 => n as usize,
            _ => return Err(PathError::InvalidBounds { rows, cols }),
        };
        self.rows = rows;
        self.cols = cols;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return Ok(());
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        Ok(())
    }

    /// Adopt the pather's grid size before a query.
    pub(crate) fn fit<P: Pather>(&mut self, pather: &P) -> Result<(), PathError> {
        let (rows, cols) = pather.bounds();
        if (rows, cols) != (self.rows, self.cols) {
            log::trace!("engine resized to {rows}x{cols}");
            self.resize(rows, cols)?;
        }
        Ok(())
    }

    /// Rows of the grid last searched.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Columns of the grid last searched.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Like [`idx`](Self::idx), but an out-of-range cell is a contract
    /// violation.
    #[inline]
    pub(crate) fn checked_idx(&self, c: Cell) -> Result<usize, PathError> {
        self.idx(c).ok_or(PathError::OutOfBounds {
            cell: c,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        let row = (idx / self.cols as usize) as i32;
        let col = (idx % self.cols as usize) as i32;
        Cell::new(row, col)
    }
}

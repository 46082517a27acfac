use hideseek_core::{Board, Cell, Direction};

use crate::distance::manhattan;

/// Minimal pathfinding interface: grid size and neighbor enumeration.
pub trait Pather {
    /// `(rows, cols)` of the grid the pather walks. Every engine query is
    /// bounded by it.
    fn bounds(&self) -> (i32, i32);

    /// Append the cells reachable in one move from `c` into `buf`, in
    /// [`Direction::ALL`] order. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

// A board is walked with unit-cost orthogonal moves into open cells.

impl Pather for Board {
    #[inline]
    fn bounds(&self) -> (i32, i32) {
        (self.rows(), self.cols())
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for d in Direction::ALL {
            let n = c.step(d);
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Board {
    #[inline]
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }
}

impl AstarPather for Board {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

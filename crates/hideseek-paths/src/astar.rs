use std::collections::BinaryHeap;

use hideseek_core::Cell;

use crate::PathCostEngine;
use crate::distance::Distance;
use crate::engine::NodeRef;
use crate::error::PathError;
use crate::traits::AstarPather;

impl PathCostEngine {
    /// Minimum number of moves from `from` to `to`, or
    /// [`Distance::Unreachable`] when the pather offers no route.
    ///
    /// Both cells must lie on the pather's grid. Identical cells are at
    /// distance 0 without searching, even when the cell is blocked. A blocked
    /// `to` is otherwise never entered, so it comes out unreachable.
    pub fn shortest_distance<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Result<Distance, PathError> {
        self.fit(pather)?;
        let start_idx = self.checked_idx(from)?;
        let goal_idx = self.checked_idx(to)?;

        let dist = if self.search(pather, start_idx, goal_idx, to) {
            Distance::Steps(self.nodes[goal_idx].g as u32)
        } else {
            Distance::Unreachable
        };
        log::trace!("distance {from} -> {to}: {dist}");
        Ok(dist)
    }

    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists.
    pub fn shortest_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Cell,
        to: Cell,
    ) -> Result<Option<Vec<Cell>>, PathError> {
        self.fit(pather)?;
        let start_idx = self.checked_idx(from)?;
        let goal_idx = self.checked_idx(to)?;

        if !self.search(pather, start_idx, goal_idx, to) {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Run A* from `start_idx` towards `goal_idx`. On success the goal node
    /// holds the path cost and the parent chain of the route.
    fn search<P: AstarPather>(
        &mut self,
        pather: &P,
        start_idx: usize,
        goal_idx: usize,
        to: Cell,
    ) -> bool {
        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        if start_idx == goal_idx {
            return true;
        }

        let from = self.cell(start_idx);
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: pather.estimate(from, to),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_cell = self.cell(ci);

            nbuf.clear();
            pather.neighbors(current_cell, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_cell, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen && tentative_g >= n.g {
                    continue;
                }

                n.generation = cur_gen;
                n.g = tentative_g;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + pather.estimate(nc, to),
                });
            }
        };

        self.nbuf = nbuf;
        found
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use hideseek_core::{Board, Cell};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::distance::manhattan;
    use crate::traits::Pather;

    fn engine(board: &Board) -> PathCostEngine {
        PathCostEngine::for_board(board)
    }

    /// Plain breadth-first distance, used as an oracle.
    fn bfs_distance(board: &Board, from: Cell, to: Cell) -> Distance {
        if from == to {
            return Distance::Steps(0);
        }
        let mut dist = vec![u32::MAX; board.len()];
        let idx = |c: Cell| (c.row * board.cols() + c.col) as usize;
        dist[idx(from)] = 0;
        let mut queue = VecDeque::from([from]);
        let mut buf = Vec::new();
        while let Some(c) = queue.pop_front() {
            buf.clear();
            board.neighbors(c, &mut buf);
            for &n in &buf {
                if dist[idx(n)] == u32::MAX {
                    dist[idx(n)] = dist[idx(c)] + 1;
                    if n == to {
                        return Distance::Steps(dist[idx(n)]);
                    }
                    queue.push_back(n);
                }
            }
        }
        Distance::Unreachable
    }

    #[test]
    fn identical_cells_are_zero() {
        let b = Board::default();
        let mut e = engine(&b);
        for c in b.cells() {
            assert_eq!(e.shortest_distance(&b, c, c), Ok(Distance::Steps(0)));
        }
    }

    #[test]
    fn open_board_distance_is_manhattan() {
        let b = Board::default();
        let mut e = engine(&b);
        for from in b.cells() {
            for to in b.cells() {
                let d = e.shortest_distance(&b, from, to).unwrap();
                assert_eq!(d, Distance::Steps(manhattan(from, to) as u32), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn distance_is_symmetric_with_obstacles() {
        let b = Board::from_ascii(
            "\
........
.######.
.#....#.
.#.##.#.
.#.#..#.
.#.#.##.
...#....
###.....",
        )
        .unwrap();
        let mut e = engine(&b);
        let open: Vec<Cell> = b.open_cells().collect();
        for &a in &open {
            for &c in &open {
                assert_eq!(
                    e.shortest_distance(&b, a, c).unwrap(),
                    e.shortest_distance(&b, c, a).unwrap(),
                    "{a} <-> {c}"
                );
            }
        }
    }

    #[test]
    fn detour_around_wall() {
        let b = Board::from_ascii(
            "\
.#..
.#..
....",
        )
        .unwrap();
        let mut e = engine(&b);
        assert_eq!(
            e.shortest_distance(&b, Cell::new(0, 0), Cell::new(0, 2)),
            Ok(Distance::Steps(6))
        );
    }

    #[test]
    fn separated_regions_are_unreachable() {
        let b = Board::from_ascii(
            "\
...#....
...#....
...#....
...#....",
        )
        .unwrap();
        let mut e = engine(&b);
        assert_eq!(
            e.shortest_distance(&b, Cell::new(0, 0), Cell::new(3, 7)),
            Ok(Distance::Unreachable)
        );
        assert_eq!(
            e.shortest_distance(&b, Cell::new(3, 7), Cell::new(0, 0)),
            Ok(Distance::Unreachable)
        );
        // Within one region distances are unaffected.
        assert_eq!(
            e.shortest_distance(&b, Cell::new(0, 4), Cell::new(3, 7)),
            Ok(Distance::Steps(6))
        );
    }

    #[test]
    fn isolated_goal_is_unreachable() {
        // Goal (0, 2) with every neighbour blocked.
        let mut b = Board::default();
        for c in [Cell::new(0, 1), Cell::new(0, 3), Cell::new(1, 2)] {
            b.block(c).unwrap();
        }
        let mut e = engine(&b);
        assert_eq!(
            e.shortest_distance(&b, Cell::new(0, 0), Cell::new(0, 2)),
            Ok(Distance::Unreachable)
        );
    }

    // A blocked goal is not special-cased: only the start == goal
    // short-circuit can report it as reached.
    #[test]
    fn blocked_goal_quirk() {
        let b = Board::from_ascii(
            "\
....
..#.
....",
        )
        .unwrap();
        let goal = Cell::new(1, 2);
        let mut e = engine(&b);
        assert_eq!(
            e.shortest_distance(&b, Cell::new(0, 0), goal),
            Ok(Distance::Unreachable)
        );
        assert_eq!(e.shortest_distance(&b, goal, goal), Ok(Distance::Steps(0)));
        // Leaving a blocked start is allowed.
        assert_eq!(
            e.shortest_distance(&b, goal, Cell::new(1, 3)),
            Ok(Distance::Steps(1))
        );
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let b = Board::default();
        let mut e = engine(&b);
        assert!(matches!(
            e.shortest_distance(&b, Cell::new(8, 0), Cell::new(0, 0)),
            Err(PathError::OutOfBounds { .. })
        ));
        assert!(matches!(
            e.shortest_distance(&b, Cell::new(0, 0), Cell::new(0, -1)),
            Err(PathError::OutOfBounds { .. })
        ));
        assert!(matches!(
            e.shortest_path(&b, Cell::new(0, 0), Cell::new(0, 8)),
            Err(PathError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn engine_follows_the_board_size() {
        // Column 1 is walled off except on the bottom row.
        let mut b = Board::default();
        for r in 0..=6 {
            b.block(Cell::new(r, 1)).unwrap();
        }
        let mut small = PathCostEngine::new(4, 4);
        assert_eq!(
            small.shortest_distance(&b, Cell::new(0, 0), Cell::new(0, 2)),
            Ok(Distance::Steps(16))
        );
        assert_eq!(
            small
                .shortest_path(&b, Cell::new(0, 0), Cell::new(0, 2))
                .unwrap()
                .map(|p| p.len()),
            Some(17)
        );

        // Bounds come from the board, not from an earlier, larger query.
        let tiny = Board::new(3, 3).unwrap();
        assert_eq!(
            small.shortest_distance(&tiny, Cell::new(0, 0), Cell::new(5, 5)),
            Err(PathError::OutOfBounds {
                cell: Cell::new(5, 5),
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(
            small.shortest_distance(&tiny, Cell::new(0, 0), Cell::new(2, 2)),
            Ok(Distance::Steps(4))
        );
    }

    #[test]
    fn matches_bfs_on_random_layouts() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let mut b = Board::new(8, 8).unwrap();
            for c in b.cells().collect::<Vec<_>>() {
                if rng.random_bool(0.3) {
                    b.block(c).unwrap();
                }
            }
            let mut e = engine(&b);
            let open: Vec<Cell> = b.open_cells().collect();
            for _ in 0..30 {
                let from = open[rng.random_range(0..open.len())];
                let to = open[rng.random_range(0..open.len())];
                assert_eq!(
                    e.shortest_distance(&b, from, to).unwrap(),
                    bfs_distance(&b, from, to),
                    "{from} -> {to} on\n{b}"
                );
            }
        }
    }

    #[test]
    fn path_includes_endpoints_and_matches_distance() {
        let b = Board::from_ascii(
            "\
.#..
.#..
....",
        )
        .unwrap();
        let mut e = engine(&b);
        let path = e
            .shortest_path(&b, Cell::new(0, 0), Cell::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(0, 2)));
        assert_eq!(path.len(), 7);
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
            assert!(b.is_open(w[1]));
        }
    }

    #[test]
    fn path_to_self_and_to_unreachable() {
        let b = Board::from_ascii(".#.").unwrap();
        let mut e = engine(&b);
        assert_eq!(
            e.shortest_path(&b, Cell::new(0, 0), Cell::new(0, 0)),
            Ok(Some(vec![Cell::new(0, 0)]))
        );
        assert_eq!(e.shortest_path(&b, Cell::new(0, 0), Cell::new(0, 2)), Ok(None));
    }

    #[test]
    fn repeated_queries_do_not_interfere() {
        let open = Board::default();
        let walled = Board::from_ascii(
            "\
........
########
........
........
........
........
........
........",
        )
        .unwrap();
        let mut e = engine(&open);
        let (a, z) = (Cell::new(0, 0), Cell::new(7, 7));
        assert_eq!(e.shortest_distance(&open, a, z), Ok(Distance::Steps(14)));
        assert_eq!(e.shortest_distance(&walled, a, z), Ok(Distance::Unreachable));
        assert_eq!(e.shortest_distance(&open, a, z), Ok(Distance::Steps(14)));
    }
}

//! Seekers and what a computer seeker believes about the hiding spot.

use std::collections::HashSet;

use hideseek_core::{Board, Cell};
use hideseek_paths::{FeedbackLabel, PathCostEngine, PathError};

use crate::config::{Controller, SeekerAi, SeekerConfig};

/// Candidate hiding spots for a [`SeekerAi::Deductive`] seeker.
///
/// Starts as every open cell and shrinks with each hot/cold label heard:
/// a cell survives only if a hider there would have produced that label.
/// The true hiding spot is therefore never discarded while the board stays
/// the same.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    cells: Vec<Cell>,
    visited: HashSet<Cell>,
}

impl Candidates {
    /// Every open cell except `pos`.
    pub fn new(board: &Board, pos: Cell) -> Self {
        let mut c = Self::default();
        c.visited.insert(pos);
        c.refill(board);
        c
    }

    fn refill(&mut self, board: &Board) {
        self.cells = board
            .open_cells()
            .filter(|c| !self.visited.contains(c))
            .collect();
        if self.cells.is_empty() {
            // Everything visited: keep looking anywhere open.
            self.cells = board.open_cells().collect();
        }
    }

    /// Record that the seeker stands on `pos` and was told `label`.
    pub fn observe(
        &mut self,
        engine: &mut PathCostEngine,
        board: &Board,
        pos: Cell,
        label: FeedbackLabel,
    ) -> Result<(), PathError> {
        self.visited.insert(pos);
        let mut kept = Vec::with_capacity(self.cells.len());
        for &c in &self.cells {
            if c == pos {
                continue;
            }
            if label.admits(engine.shortest_distance(board, pos, c)?) {
                kept.push(c);
            }
        }
        log::debug!(
            "{} of {} candidates fit {label:?} at {pos}",
            kept.len(),
            self.cells.len()
        );
        self.cells = kept;
        if self.cells.is_empty() {
            log::debug!("no candidate left, widening search");
            self.refill(board);
        }
        Ok(())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.cells.contains(&c)
    }
}

/// A seeker taking part in a round.
#[derive(Debug, Clone)]
pub struct Seeker {
    pub name: String,
    pub controller: Controller,
    pub start: Cell,
    pub pos: Cell,
    pub barriers_left: u32,
    /// Only kept for deductive computer seekers.
    pub candidates: Option<Candidates>,
}

impl Seeker {
    pub fn new(cfg: &SeekerConfig, barriers: u32) -> Self {
        Self {
            name: cfg.name.clone(),
            controller: cfg.controller,
            start: cfg.start,
            pos: cfg.start,
            barriers_left: barriers,
            candidates: None,
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.controller, Controller::Computer(_))
    }

    pub fn is_deductive(&self) -> bool {
        self.controller == Controller::Computer(SeekerAi::Deductive)
    }

    /// Return to the start cell with a full barrier allowance.
    pub fn reset(&mut self, barriers: u32) {
        self.pos = self.start;
        self.barriers_left = barriers;
        self.candidates = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hideseek_paths::feedback_label;

    #[test]
    fn starts_with_every_other_open_cell() {
        let b = Board::from_ascii("..#\n...").unwrap();
        let c = Candidates::new(&b, Cell::new(0, 0));
        assert_eq!(c.cells().len(), 4);
        assert!(!c.contains(Cell::new(0, 0)));
        assert!(!c.contains(Cell::new(0, 2)));
    }

    #[test]
    fn observation_keeps_the_true_spot() {
        let b = Board::default();
        let mut e = PathCostEngine::for_board(&b);
        let hider = Cell::new(5, 2);
        let mut c = Candidates::new(&b, Cell::ORIGIN);
        let before = c.cells().len();

        for pos in [Cell::ORIGIN, Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)] {
            let label = feedback_label(e.shortest_distance(&b, pos, hider).unwrap());
            c.observe(&mut e, &b, pos, label).unwrap();
            assert!(c.contains(hider));
            assert!(!c.contains(pos));
        }
        assert!(c.cells().len() < before);
    }

    #[test]
    fn burning_narrows_to_the_ring() {
        let b = Board::default();
        let mut e = PathCostEngine::for_board(&b);
        let pos = Cell::new(4, 4);
        let mut c = Candidates::new(&b, pos);
        c.observe(&mut e, &b, pos, FeedbackLabel::Burning).unwrap();
        // Cells at distance 1 or 2 from the centre of an open board.
        assert_eq!(c.cells().len(), 4 + 8);
    }

    #[test]
    fn contradiction_widens_again() {
        let b = Board::from_ascii("...").unwrap();
        let mut e = PathCostEngine::for_board(&b);
        let mut c = Candidates::new(&b, Cell::new(0, 0));
        // Nothing on a 1x3 board is cold from the left end.
        c.observe(&mut e, &b, Cell::new(0, 0), FeedbackLabel::Cold)
            .unwrap();
        assert_eq!(c.cells(), &[Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn seeker_reset() {
        let cfg = SeekerConfig::new("P", Cell::new(2, 2), Controller::Human);
        let mut s = Seeker::new(&cfg, 1);
        s.pos = Cell::new(3, 3);
        s.barriers_left = 0;
        s.reset(1);
        assert_eq!(s.pos, Cell::new(2, 2));
        assert_eq!(s.barriers_left, 1);
        assert!(!s.is_computer());
    }
}

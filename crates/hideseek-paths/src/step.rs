use hideseek_core::{Cell, Direction};

use crate::PathCostEngine;
use crate::distance::Distance;
use crate::error::PathError;
use crate::traits::AstarPather;

/// A single move chosen by [`PathCostEngine::best_step_toward`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub dir: Direction,
    pub to: Cell,
    /// Distance from `to` to the nearest goal.
    pub distance: Distance,
}

impl PathCostEngine {
    /// Distance from `from` to the closest of `goals`.
    ///
    /// Returns [`Distance::Unreachable`] when no goal can be reached.
    pub fn nearest_distance<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Cell,
        goals: &[Cell],
    ) -> Result<Distance, PathError> {
        if goals.is_empty() {
            return Err(PathError::EmptyGoals);
        }
        let mut best = Distance::Unreachable;
        for &g in goals {
            let d = self.shortest_distance(pather, from, g)?;
            if d < best {
                best = d;
                if best == Distance::Steps(0) {
                    break;
                }
            }
        }
        Ok(best)
    }

    /// Pick the move from `current` that gets closest to any of `goals`.
    ///
    /// Candidates are the neighbours the pather lets `current` enter,
    /// examined in [`Direction::ALL`] order (up, down, left, right); on equal
    /// distances the earlier direction wins. When every candidate is
    /// unreachable the first one is still returned so the caller always gets
    /// a legal move. `Ok(None)` means `current` has no enterable neighbour.
    pub fn best_step_toward<P: AstarPather>(
        &mut self,
        pather: &P,
        current: Cell,
        goals: &[Cell],
    ) -> Result<Option<Step>, PathError> {
        self.fit(pather)?;
        self.checked_idx(current)?;
        if goals.is_empty() {
            return Err(PathError::EmptyGoals);
        }
        for &g in goals {
            self.checked_idx(g)?;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        let enterable = nbuf.clone();
        self.nbuf = nbuf;

        let mut best: Option<Step> = None;
        for (dir, to) in current.neighbors_4() {
            if self.idx(to).is_none() || !enterable.contains(&to) {
                continue;
            }
            let distance = self.nearest_distance(pather, to, goals)?;
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Step { dir, to, distance });
            }
        }

        match best {
            Some(s) => log::debug!("step from {current}: {} to {} ({})", s.dir, s.to, s.distance),
            None => log::debug!("step from {current}: boxed in"),
        }
        Ok(best)
    }
}

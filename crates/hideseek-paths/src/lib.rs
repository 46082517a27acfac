//! Path costs for hide-and-seek boards.
//!
//! [`PathCostEngine`] answers the three questions the game asks every turn:
//!
//! - **How far?** A\* shortest distance between two cells
//!   ([`PathCostEngine::shortest_distance`]), or to the nearest of several
//!   ([`PathCostEngine::nearest_distance`]).
//! - **How warm?** A categorical [`FeedbackLabel`] for a distance
//!   ([`feedback_label`]).
//! - **Which way?** The greedy one-step move toward a goal set
//!   ([`PathCostEngine::best_step_toward`]).
//!
//! Movement is orthogonal with unit cost, so the Manhattan heuristic is
//! admissible and the distances are exact. Obstacles and grid size come
//! from the [`Pather`] passed to each query; [`hideseek_core::Board`]
//! implements the full trait hierarchy.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | every engine query |

mod astar;
mod distance;
mod engine;
mod error;
mod feedback;
mod step;
mod traits;

pub use distance::{Distance, manhattan};
pub use engine::PathCostEngine;
pub use error::PathError;
pub use feedback::{FeedbackLabel, THRESHOLDS, feedback_label};
pub use step::Step;
pub use traits::{AstarPather, Pather, WeightedPather};

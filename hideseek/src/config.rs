//! Game configuration.

use std::collections::HashSet;

use hideseek_core::{Cell, DEFAULT_COLS, DEFAULT_ROWS};

use crate::error::ConfigError;

/// Default number of turns before the hider escapes.
pub const DEFAULT_STEP_BUDGET: u32 = 200;

/// How a computer seeker chooses where to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeekerAi {
    /// Knows the hidden cell and heads straight for it.
    Omniscient,
    /// Only hears the hot/cold label after each move and heads for the
    /// nearest cell that is still consistent with everything it heard.
    Deductive,
}

/// Who drives a seeker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Controller {
    Human,
    Computer(SeekerAi),
}

/// One seeker seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekerConfig {
    pub name: String,
    pub start: Cell,
    pub controller: Controller,
}

impl SeekerConfig {
    pub fn new(name: &str, start: Cell, controller: Controller) -> Self {
        Self {
            name: name.to_string(),
            start,
            controller,
        }
    }
}

/// Everything needed to set up a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    /// One or two seekers; with two they take turns.
    pub seekers: Vec<SeekerConfig>,
    /// Whether a human picks the hiding spot. Otherwise it is drawn at random.
    pub human_hides: bool,
    /// Barriers each seeker may place per round.
    pub barriers_per_seeker: u32,
    /// Turns (all seekers together) before the hider escapes.
    pub step_budget: u32,
    /// RNG seed for reproducible rounds; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    /// Two humans on an 8×8 board starting in opposite corners, one barrier
    /// each, hider placed at random.
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seekers: vec![
                SeekerConfig::new("Player 1", Cell::new(0, 0), Controller::Human),
                SeekerConfig::new(
                    "Player 2",
                    Cell::new(DEFAULT_ROWS - 1, DEFAULT_COLS - 1),
                    Controller::Human,
                ),
            ],
            human_hides: false,
            barriers_per_seeker: 1,
            step_budget: DEFAULT_STEP_BUDGET,
            seed: None,
        }
    }
}

impl GameConfig {
    /// A human hides and a single computer seeker, starting in the top-left
    /// corner, looks for them.
    pub fn computer_seeker(ai: SeekerAi) -> Self {
        Self {
            seekers: vec![SeekerConfig::new(
                "Computer",
                Cell::new(0, 0),
                Controller::Computer(ai),
            )],
            human_hides: true,
            barriers_per_seeker: 0,
            ..Self::default()
        }
    }

    /// A single human seeker guided by hot/cold hints toward a random
    /// hiding spot.
    pub fn solo() -> Self {
        Self {
            seekers: vec![SeekerConfig::new(
                "Player",
                Cell::new(0, 0),
                Controller::Human,
            )],
            barriers_per_seeker: 0,
            ..Self::default()
        }
    }

    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 || self.cols < 2 || self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.seekers.is_empty() || self.seekers.len() > 2 {
            return Err(ConfigError::SeekerCount(self.seekers.len()));
        }
        let mut starts = HashSet::new();
        for s in &self.seekers {
            let c = s.start;
            if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
                return Err(ConfigError::StartOutOfBounds {
                    name: s.name.clone(),
                    cell: c,
                });
            }
            if !starts.insert(c) {
                return Err(ConfigError::SharedStart(c));
            }
        }
        if self.step_budget == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::solo().validate(), Ok(()));
        assert_eq!(
            GameConfig::computer_seeker(SeekerAi::Deductive).validate(),
            Ok(())
        );
    }

    #[test]
    fn default_matches_two_player_layout() {
        let c = GameConfig::default();
        assert_eq!((c.rows, c.cols), (8, 8));
        assert_eq!(c.seekers[0].start, Cell::new(0, 0));
        assert_eq!(c.seekers[1].start, Cell::new(7, 7));
        assert_eq!(c.barriers_per_seeker, 1);
        assert!(!c.human_hides);
    }

    #[test]
    fn rejects_tiny_boards() {
        let c = GameConfig {
            rows: 1,
            ..GameConfig::solo()
        };
        assert_eq!(c.validate(), Err(ConfigError::InvalidSize { rows: 1, cols: 8 }));
    }

    #[test]
    fn rejects_boards_too_large_to_index() {
        let c = GameConfig {
            rows: 50_000,
            cols: 50_000,
            ..GameConfig::solo()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::InvalidSize {
                rows: 50_000,
                cols: 50_000
            })
        );
    }

    #[test]
    fn rejects_bad_seekers() {
        let mut c = GameConfig::default();
        c.seekers.clear();
        assert_eq!(c.validate(), Err(ConfigError::SeekerCount(0)));

        let mut c = GameConfig::default();
        c.seekers.push(SeekerConfig::new("P3", Cell::new(3, 3), Controller::Human));
        assert_eq!(c.validate(), Err(ConfigError::SeekerCount(3)));

        let mut c = GameConfig::default();
        c.seekers[1].start = Cell::new(0, 0);
        assert_eq!(c.validate(), Err(ConfigError::SharedStart(Cell::new(0, 0))));

        let mut c = GameConfig::default();
        c.seekers[1].start = Cell::new(8, 8);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_zero_budget() {
        let c = GameConfig {
            step_budget: 0,
            ..GameConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZeroStepBudget));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = GameConfig::computer_seeker(SeekerAi::Omniscient).with_seed(7);
        let json = serde_json::to_string(&c).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}

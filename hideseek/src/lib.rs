//! Hide and seek on a small grid.
//!
//! A [`GameSession`] runs rounds in which one or two seekers, human or
//! computer, hunt for a hidden cell. Humans hear a hot/cold hint after every
//! move; computer seekers pick their moves with the
//! [`PathCostEngine`](hideseek_paths::PathCostEngine). Rendering and input
//! mapping are left to the front end, which drives the session through
//! [`GameSession::act`] and [`GameSession::computer_turn`].

pub mod config;
pub mod error;
pub mod game_log;
pub mod phase;
pub mod seeker;
pub mod session;

pub use config::{Controller, GameConfig, SeekerAi, SeekerConfig};
pub use error::{ConfigError, GameError};
pub use game_log::{GameLog, LogStyle};
pub use phase::{Outcome, Phase, PhaseTag};
pub use seeker::{Candidates, Seeker};
pub use session::{Action, GameSession, Turn};

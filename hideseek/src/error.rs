use std::fmt;

use hideseek_core::{BoardError, Cell, Direction};
use hideseek_paths::PathError;

use crate::phase::PhaseTag;

/// Errors found while validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Both dimensions must be at least 2 and the cell count must fit an
    /// `i32`.
    InvalidSize { rows: i32, cols: i32 },
    /// One or two seekers are supported.
    SeekerCount(usize),
    StartOutOfBounds { name: String, cell: Cell },
    /// Two seekers start on the same cell.
    SharedStart(Cell),
    ZeroStepBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => {
                write!(f, "config: unsupported board size {rows}x{cols}")
            }
            Self::SeekerCount(n) => write!(f, "config: expected 1 or 2 seekers, got {n}"),
            Self::StartOutOfBounds { name, cell } => {
                write!(f, "config: {name} starts off the board at {cell}")
            }
            Self::SharedStart(cell) => write!(f, "config: two seekers start at {cell}"),
            Self::ZeroStepBudget => f.write_str("config: step budget must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by [`GameSession`](crate::GameSession) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The phase table does not allow this transition.
    InvalidTransition { from: PhaseTag, to: PhaseTag },
    /// The operation is only meaningful in another phase.
    WrongPhase { expected: PhaseTag, actual: PhaseTag },
    /// A human action was submitted on a computer's turn, or the reverse.
    NotYourTurn { seeker: usize },
    /// The destination is blocked.
    IllegalMove { from: Cell, dir: Direction },
    /// No seeker has this index.
    UnknownSeeker(usize),
    /// The hider may not start on a seeker or a blocked cell.
    InvalidHidingSpot(Cell),
    /// Every open cell is taken by a seeker.
    NoHidingSpot,
    Board(BoardError),
    Path(PathError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { from, to } => {
                write!(f, "game: cannot go from {from:?} to {to:?}")
            }
            Self::WrongPhase { expected, actual } => {
                write!(f, "game: expected phase {expected:?}, currently {actual:?}")
            }
            Self::NotYourTurn { seeker } => write!(f, "game: not the turn of seeker {seeker}"),
            Self::IllegalMove { from, dir } => {
                write!(f, "game: cannot move {dir} from {from}")
            }
            Self::UnknownSeeker(i) => write!(f, "game: no seeker {i}"),
            Self::InvalidHidingSpot(cell) => write!(f, "game: cannot hide at {cell}"),
            Self::NoHidingSpot => f.write_str("game: no free cell to hide in"),
            Self::Board(e) => write!(f, "game: {e}"),
            Self::Path(e) => write!(f, "game: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<PathError> for GameError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

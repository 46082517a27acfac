//! **hideseek-core** — geometry and board types for the hide-and-seek game.
//!
//! This crate provides the foundational types shared by the pathfinding
//! crate and the game: [`Cell`] positions, the four [`Direction`]s and the
//! [`Board`] with its blocked cells.

pub mod board;
pub mod error;
pub mod geom;

pub use board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
pub use error::BoardError;
pub use geom::{Cell, Direction};

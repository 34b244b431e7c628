//! Core module - pure game logic.
//!
//! Board, pieces, the shape catalog, and the game controller. No
//! dependency on the terminal or any I/O; frontends observe the grid
//! through queries and drained cell events.

pub mod board;
pub mod catalog;
pub mod config;
pub mod game;
pub mod piece;

pub use board::{Board, CellEvent, Grid, SpawnOutcome};
pub use config::{GameConfig, PresetCell};
pub use game::Game;
pub use piece::Piece;

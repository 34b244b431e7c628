//! Gridfall: a terminal falling-block puzzle game.
//!
//! `core` holds the pure simulation (board, pieces, catalog, game
//! controller); `term` and `input` are the terminal collaborators; the
//! binary in `main.rs` wires them into a fixed-timestep host loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

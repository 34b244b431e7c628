//! Shared pure data types.
//!
//! Everything here is plain data with no dependency on the terminal or
//! any I/O, so both the core simulation and the frontends can use it.

use serde::{Deserialize, Serialize};

/// Largest cell count of any catalog shape (the custom U shape has five).
pub const MAX_SHAPE_CELLS: usize = 5;

/// A grid coordinate or translation, y-up.
pub type GridVec = (i32, i32);

pub const LEFT: GridVec = (-1, 0);
pub const RIGHT: GridVec = (1, 0);
pub const DOWN: GridVec = (0, -1);

/// Shape variants: the seven standard tetrominoes plus the custom U.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
    U,
}

impl ShapeId {
    /// Parse a shape from its letter (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "t" => Some(ShapeId::T),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            "u" => Some(ShapeId::U),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::O => "o",
            ShapeId::T => "t",
            ShapeId::J => "j",
            ShapeId::L => "l",
            ShapeId::S => "s",
            ShapeId::Z => "z",
            ShapeId::U => "u",
        }
    }
}

/// Opaque visual tile reference. The core stores and moves these around
/// but never interprets them; frontends map them to colors or glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

/// Handle for a tracked piece instance. Allocated by the board, never
/// reused within one board lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u32);

/// Discrete edge-triggered player inputs.
///
/// Each maps 1:1 to a single board/piece operation. Reset is not an
/// input event; it is a separate entry point on the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    /// Debug: run line resolution outside the gravity tick.
    ForceResolve,
}

impl InputEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::RotateCw => "rotateCw",
            InputEvent::RotateCcw => "rotateCcw",
            InputEvent::ForceResolve => "forceResolve",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_letters_round_trip() {
        for shape in [
            ShapeId::I,
            ShapeId::O,
            ShapeId::T,
            ShapeId::J,
            ShapeId::L,
            ShapeId::S,
            ShapeId::Z,
            ShapeId::U,
        ] {
            assert_eq!(ShapeId::from_str(shape.as_str()), Some(shape));
        }
        assert_eq!(ShapeId::from_str("x"), None);
    }
}

//! Game configuration.
//!
//! Defaults reproduce the classic setup: 10x20 board, spawn at (-1, 8),
//! half-second gravity, the fixed repeating shape sequence, and a
//! non-linear score table. Configs load from JSON and are validated
//! before the board is built.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::types::{GridVec, ShapeId, TileId};

/// One pre-populated grid cell (untracked background tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PresetCell {
    pub x: i32,
    pub y: i32,
    pub tile: TileId,
}

impl PresetCell {
    pub const fn new(x: i32, y: i32, tile: TileId) -> Self {
        Self { x, y, tile }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    /// Anchor position for freshly spawned pieces.
    pub spawn_position: GridVec,
    /// Gravity step interval in seconds.
    pub drop_interval: f32,
    /// Cyclic spawn order; repeats are allowed.
    pub sequence: Vec<ShapeId>,
    /// Points per cleared-line count; indexes past the end clamp to the
    /// last entry.
    pub score_table: Vec<u32>,
    /// Background tiles present before gameplay begins, restored on
    /// reset.
    pub preset_tiles: Vec<PresetCell>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 20,
            spawn_position: (-1, 8),
            drop_interval: 0.5,
            sequence: vec![
                ShapeId::U,
                ShapeId::L,
                ShapeId::L,
                ShapeId::T,
                ShapeId::O,
                ShapeId::I,
                ShapeId::U,
            ],
            score_table: vec![0, 100, 300, 500, 800],
            preset_tiles: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.board_width > 0, "board width must be positive");
        ensure!(self.board_height > 0, "board height must be positive");
        ensure!(self.drop_interval > 0.0, "drop interval must be positive");
        ensure!(!self.sequence.is_empty(), "shape sequence must not be empty");
        ensure!(!self.score_table.is_empty(), "score table must not be empty");
        Ok(())
    }
}

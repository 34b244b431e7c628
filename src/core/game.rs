//! Game controller: the thin policy layer above board and pieces.
//!
//! Owns the fixed-interval gravity timer, the cumulative score, and the
//! game-over flag. Every mutation of the grid flows through here, and
//! each one follows the same protocol: unstamp the active piece,
//! attempt the operation, restamp. Validating a move while the piece is
//! still stamped would make it collide with its own cells.

use anyhow::Result;

use crate::core::board::{Board, CellEvent, SpawnOutcome};
use crate::core::config::GameConfig;
use crate::types::{GridVec, InputEvent, DOWN, LEFT, RIGHT};

pub struct Game {
    board: Board,
    drop_interval: f32,
    drop_timer: f32,
    score_table: Vec<u32>,
    score: u32,
    game_over: bool,
}

impl Game {
    /// Validate the config, build the board, and spawn the first piece.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            board: Board::new(&config),
            drop_interval: config.drop_interval,
            drop_timer: 0.0,
            score_table: config.score_table,
            score: 0,
            game_over: false,
        };
        game.game_over = game.board.spawn_next() == SpawnOutcome::Blocked;
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Drain pending cell changes for render collaborators.
    pub fn take_cell_events(&mut self) -> Vec<CellEvent> {
        self.board.grid_mut().take_events()
    }

    /// Advance the gravity timer. Once a full drop interval has
    /// accumulated, step the active piece down one row; a failed step
    /// lands the piece and runs line resolution plus the next spawn.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.game_over {
            return;
        }

        self.drop_timer += delta_seconds;
        if self.drop_timer >= self.drop_interval {
            self.drop_timer = 0.0;
            self.gravity_step();
        }
    }

    /// Apply one discrete input. Returns whether any state changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.game_over || self.board.active_id().is_none() {
            return false;
        }

        match event {
            InputEvent::MoveLeft => self.shift(LEFT),
            InputEvent::MoveRight => self.shift(RIGHT),
            InputEvent::SoftDrop => self.shift(DOWN),
            InputEvent::HardDrop => {
                self.board.unstamp_active();
                while self.board.move_active(DOWN) {}
                self.board.stamp_active();
                self.lock_and_resolve();
                true
            }
            // Positive rotation is counterclockwise in y-up coordinates.
            InputEvent::RotateCw => self.spin(-1),
            InputEvent::RotateCcw => self.spin(1),
            InputEvent::ForceResolve => {
                self.board.unstamp_active();
                let cleared = self.board.resolve_lines();
                self.score += self.line_score(cleared);
                self.board.stamp_active();
                cleared > 0
            }
        }
    }

    /// Restore the board to its preset snapshot and start a new round.
    pub fn reset(&mut self) {
        self.board.reset();
        self.score = 0;
        self.drop_timer = 0.0;
        self.game_over = self.board.spawn_next() == SpawnOutcome::Blocked;
    }

    fn shift(&mut self, translation: GridVec) -> bool {
        self.board.unstamp_active();
        let moved = self.board.move_active(translation);
        self.board.stamp_active();
        moved
    }

    fn spin(&mut self, direction: i32) -> bool {
        self.board.unstamp_active();
        let rotated = self.board.rotate_active(direction);
        self.board.stamp_active();
        rotated
    }

    fn gravity_step(&mut self) {
        if self.board.active_id().is_none() {
            return;
        }

        self.board.unstamp_active();
        let moved = self.board.move_active(DOWN);
        self.board.stamp_active();

        if !moved {
            self.lock_and_resolve();
        }
    }

    /// Land the active piece: freeze it, resolve full rows, convert the
    /// clear count to points, and spawn the next piece. A blocked spawn
    /// ends the game.
    fn lock_and_resolve(&mut self) {
        self.board.freeze_active();
        let cleared = self.board.resolve_lines();
        self.score += self.line_score(cleared);
        if self.board.spawn_next() == SpawnOutcome::Blocked {
            self.game_over = true;
        }
    }

    fn line_score(&self, cleared: u32) -> u32 {
        let index = (cleared as usize).min(self.score_table.len() - 1);
        self.score_table[index]
    }
}

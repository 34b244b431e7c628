//! Board: the grid authority.
//!
//! The grid keeps two maps that must never diverge: `tiles` (visual
//! fill, including untracked preset tiles) and `owners` (cells occupied
//! by a tracked piece). Every mutation goes through `set_cell` /
//! `clear_cell`, which update both together and emit a `CellEvent` for
//! render collaborators.
//!
//! Coordinates are y-up and centered at the origin: for a 10x20 board,
//! x ranges over [-5, 5) and y over [-10, 10).

use std::collections::HashMap;

use crate::core::catalog;
use crate::core::config::GameConfig;
use crate::core::piece::Piece;
use crate::types::{GridVec, PieceId, ShapeId, TileId};

/// A single visual cell change, drained by render collaborators.
/// `tile == None` means the cell was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub pos: GridVec,
    pub tile: Option<TileId>,
}

/// Result of asking the board for the next piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    /// The spawn position was already illegal; nothing was stamped and
    /// there is no active piece. The game is over.
    Blocked,
}

/// The logical cell grid: bounds, visual fill, and piece ownership.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: HashMap<GridVec, TileId>,
    owners: HashMap<GridVec, PieceId>,
    events: Vec<CellEvent>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: HashMap::new(),
            owners: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> i32 {
        -self.width / 2
    }

    pub fn right(&self) -> i32 {
        self.width / 2
    }

    pub fn bottom(&self) -> i32 {
        -self.height / 2
    }

    pub fn top(&self) -> i32 {
        self.height / 2
    }

    pub fn in_bounds(&self, (x, y): GridVec) -> bool {
        x >= self.left() && x < self.right() && y >= self.bottom() && y < self.top()
    }

    pub fn has_tile(&self, pos: GridVec) -> bool {
        self.tiles.contains_key(&pos)
    }

    pub fn tile_at(&self, pos: GridVec) -> Option<TileId> {
        self.tiles.get(&pos).copied()
    }

    pub fn owner_at(&self, pos: GridVec) -> Option<PieceId> {
        self.owners.get(&pos).copied()
    }

    /// Number of cells currently owned by tracked pieces.
    pub fn tracked_cell_count(&self) -> usize {
        self.owners.len()
    }

    /// Would the given offsets placed at `anchor` be legal?
    ///
    /// Fails on any out-of-bounds cell or any cell that already shows a
    /// tile. Occupancy is checked as-is: a piece being moved must be
    /// unstamped first or it will collide with its own cells.
    pub fn is_position_valid(&self, cells: &[GridVec], anchor: GridVec) -> bool {
        cells.iter().all(|&(dx, dy)| {
            let pos = (anchor.0 + dx, anchor.1 + dy);
            self.in_bounds(pos) && !self.has_tile(pos)
        })
    }

    /// Drain pending cell changes (render dirtiness signal).
    pub fn take_events(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_cell(&mut self, pos: GridVec, tile: TileId, owner: Option<PieceId>) {
        self.tiles.insert(pos, tile);
        match owner {
            Some(id) => {
                self.owners.insert(pos, id);
            }
            None => {
                self.owners.remove(&pos);
            }
        }
        self.events.push(CellEvent {
            pos,
            tile: Some(tile),
        });
    }

    fn clear_cell(&mut self, pos: GridVec) {
        self.tiles.remove(&pos);
        self.owners.remove(&pos);
        self.events.push(CellEvent { pos, tile: None });
    }

    /// Wipe everything and re-apply an untracked tile layout.
    fn restore(&mut self, layout: &HashMap<GridVec, TileId>) {
        let occupied: Vec<GridVec> = self.tiles.keys().copied().collect();
        for pos in occupied {
            self.clear_cell(pos);
        }
        for (&pos, &tile) in layout {
            self.set_cell(pos, tile, None);
        }
    }
}

/// The board: grid plus piece table, sequence cursor, and spawn logic.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    pieces: HashMap<PieceId, Piece>,
    next_piece_id: u32,
    active: Option<PieceId>,
    sequence: Vec<ShapeId>,
    cursor: usize,
    spawn_position: GridVec,
    /// Preset tiles cached at construction, restored verbatim on reset.
    initial_tiles: HashMap<GridVec, TileId>,
}

impl Board {
    /// Build a board from configuration. The caller is expected to have
    /// validated the config; an empty sequence is a constructor
    /// contract violation.
    pub fn new(config: &GameConfig) -> Self {
        assert!(
            !config.sequence.is_empty(),
            "shape sequence must not be empty"
        );

        let mut grid = Grid::new(config.board_width, config.board_height);
        let mut initial_tiles = HashMap::new();
        for cell in &config.preset_tiles {
            let pos = (cell.x, cell.y);
            if grid.in_bounds(pos) {
                initial_tiles.insert(pos, cell.tile);
            }
        }
        grid.restore(&initial_tiles);

        Self {
            grid,
            pieces: HashMap::new(),
            next_piece_id: 0,
            active: None,
            sequence: config.sequence.clone(),
            cursor: 0,
            spawn_position: config.spawn_position,
            initial_tiles,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active_id(&self) -> Option<PieceId> {
        self.active
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.and_then(|id| self.pieces.get(&id))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Number of live (not yet spent) tracked pieces.
    pub fn live_piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Write the active piece's cells into the grid.
    pub fn stamp_active(&mut self) {
        if let Some(id) = self.active {
            self.stamp(id);
        }
    }

    /// Erase the active piece's cells from the grid.
    pub fn unstamp_active(&mut self) {
        if let Some(id) = self.active {
            self.unstamp(id);
        }
    }

    fn stamp(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get(&id) {
            let tile = piece.tile();
            for pos in piece.absolute_cells() {
                self.grid.set_cell(pos, tile, Some(id));
            }
        }
    }

    fn unstamp(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get(&id) {
            for pos in piece.absolute_cells() {
                self.grid.clear_cell(pos);
            }
        }
    }

    /// Translate the active piece. The piece must currently be
    /// unstamped; commits only if the target is legal.
    pub fn move_active(&mut self, translation: GridVec) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        match self.pieces.get_mut(&id) {
            Some(piece) => piece.try_move(&self.grid, translation),
            None => false,
        }
    }

    /// Rotate the active piece (+1 or -1), with wall-kick recovery.
    pub fn rotate_active(&mut self, direction: i32) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        match self.pieces.get_mut(&id) {
            Some(piece) => piece.rotate(&self.grid, direction),
            None => false,
        }
    }

    /// Mark the active piece as landed. It stays in the piece table for
    /// ownership bookkeeping but no longer accepts movement.
    pub fn freeze_active(&mut self) {
        if let Some(id) = self.active {
            if let Some(piece) = self.pieces.get_mut(&id) {
                piece.freeze();
            }
        }
    }

    /// Advance the sequence cursor (wrapping) and spawn that shape at
    /// the configured start position.
    ///
    /// If the start position is already illegal the game is over:
    /// nothing is stamped, no piece is registered, and `Blocked` is
    /// returned.
    pub fn spawn_next(&mut self) -> SpawnOutcome {
        if self.cursor >= self.sequence.len() {
            self.cursor = 0;
        }
        let shape = self.sequence[self.cursor];
        self.cursor += 1;

        let piece = Piece::spawn(catalog::shape_data(shape), self.spawn_position);
        if !self.grid.is_position_valid(piece.cells(), piece.anchor()) {
            self.active = None;
            return SpawnOutcome::Blocked;
        }

        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        self.pieces.insert(id, piece);
        self.active = Some(id);
        self.stamp(id);
        SpawnOutcome::Spawned
    }

    fn is_line_full(&self, y: i32) -> bool {
        (self.grid.left()..self.grid.right()).all(|x| self.grid.has_tile((x, y)))
    }

    /// Destroy one full row. Cells owned by tracked pieces decrement
    /// that piece's active-cell count (spent pieces leave the table);
    /// untracked preset tiles are simply cleared.
    fn destroy_line(&mut self, y: i32) {
        for x in self.grid.left()..self.grid.right() {
            let pos = (x, y);
            if let Some(id) = self.grid.owner_at(pos) {
                let spent = match self.pieces.get_mut(&id) {
                    Some(piece) => piece.reduce_active_count(),
                    None => false,
                };
                if spent {
                    self.pieces.remove(&id);
                    if self.active == Some(id) {
                        self.active = None;
                    }
                }
            }
            if self.grid.has_tile(pos) {
                self.grid.clear_cell(pos);
            }
        }
    }

    /// Shift every row above `cleared_row` down by one, moving both
    /// ownership and untracked tiles.
    fn shift_rows_down(&mut self, cleared_row: i32) {
        for y in (cleared_row + 1)..self.grid.top() {
            for x in self.grid.left()..self.grid.right() {
                let pos = (x, y);
                let owner = self.grid.owner_at(pos);
                if let Some(tile) = self.grid.tile_at(pos) {
                    self.grid.clear_cell(pos);
                    self.grid.set_cell((x, y - 1), tile, owner);
                }
            }
        }
    }

    /// Find, destroy, and compact all full rows in one pass.
    ///
    /// Rows are collected bottom to top, destroyed first, then the
    /// collapse runs in ascending order with the row index adjusted by
    /// the number of rows already compacted, so a multi-row clear
    /// shifts upper content exactly once.
    pub fn resolve_lines(&mut self) -> u32 {
        let mut destroyed = Vec::new();
        for y in self.grid.bottom()..self.grid.top() {
            if self.is_line_full(y) {
                self.destroy_line(y);
                destroyed.push(y);
            }
        }

        for (already_shifted, &y) in destroyed.iter().enumerate() {
            self.shift_rows_down(y - already_shifted as i32);
        }

        destroyed.len() as u32
    }

    /// Drop every live piece and restore the preset layout exactly.
    ///
    /// Spawning the first piece of the new round is the game
    /// controller's job, so the restored state is observable on its
    /// own: tiles equal the construction-time snapshot and no cell has
    /// an owner.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.active = None;
        self.cursor = 0;
        self.grid.restore(&self.initial_tiles);
    }
}

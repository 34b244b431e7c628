//! Piece: one live falling shape.
//!
//! A piece owns a mutable copy of its catalog offsets (rotation rewrites
//! them) plus an anchor position on the board. It never touches the grid
//! directly; every movement validates against a `Grid` passed in by the
//! caller, which keeps ownership one-directional (the board owns pieces,
//! pieces only query the grid).

use arrayvec::ArrayVec;

use crate::core::board::Grid;
use crate::core::catalog::ShapeData;
use crate::types::{GridVec, ShapeId, TileId, MAX_SHAPE_CELLS};

/// Wall-kick candidates, tried in this exact order after an in-place
/// rotation fails: left, right, down, down-left, down-right.
const WALL_KICKS: [GridVec; 5] = [(-1, 0), (1, 0), (0, -1), (-1, -1), (1, -1)];

/// The long bar additionally tries two-wide horizontal kicks, after the
/// shared list.
const BAR_KICKS: [GridVec; 2] = [(-2, 0), (2, 0)];

#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    shape: ShapeId,
    tile: TileId,
    half_cell_pivot: bool,
    /// Current relative offsets; mutated by rotation only.
    cells: ArrayVec<GridVec, MAX_SHAPE_CELLS>,
    /// Absolute board position; mutated by `try_move` only.
    anchor: GridVec,
    frozen: bool,
    /// Cells not yet destroyed by line clears. At zero the piece is
    /// spent and the board drops it from its table.
    active_cells: u8,
}

impl Piece {
    /// Build a fresh piece from catalog data at the given anchor.
    pub fn spawn(data: &ShapeData, anchor: GridVec) -> Self {
        let cells: ArrayVec<GridVec, MAX_SHAPE_CELLS> = data.cells.iter().copied().collect();
        let active_cells = cells.len() as u8;
        Self {
            shape: data.shape,
            tile: data.tile,
            half_cell_pivot: data.half_cell_pivot,
            cells,
            anchor,
            frozen: false,
            active_cells,
        }
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn tile(&self) -> TileId {
        self.tile
    }

    pub fn anchor(&self) -> GridVec {
        self.anchor
    }

    pub fn cells(&self) -> &[GridVec] {
        &self.cells
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Stop accepting movement; the piece is now plain board content.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn active_cells(&self) -> u8 {
        self.active_cells
    }

    /// Absolute cells currently covered by the piece.
    pub fn absolute_cells(&self) -> impl Iterator<Item = GridVec> + '_ {
        let (ax, ay) = self.anchor;
        self.cells.iter().map(move |&(dx, dy)| (ax + dx, ay + dy))
    }

    /// Translate the piece if the target position is legal.
    ///
    /// The sole mutator of `anchor`. Callers must have unstamped the
    /// piece from the grid first, otherwise it collides with its own
    /// cells.
    pub fn try_move(&mut self, grid: &Grid, translation: GridVec) -> bool {
        if self.frozen {
            return false;
        }

        let candidate = (self.anchor.0 + translation.0, self.anchor.1 + translation.1);
        if grid.is_position_valid(&self.cells, candidate) {
            self.anchor = candidate;
            true
        } else {
            false
        }
    }

    /// Rotate 90 degrees (`direction` is +1 or -1), with wall-kick
    /// recovery. On failure the piece is left exactly as before.
    pub fn rotate(&mut self, grid: &Grid, direction: i32) -> bool {
        debug_assert!(direction == 1 || direction == -1);
        if self.frozen {
            return false;
        }

        let original = self.cells.clone();
        for cell in self.cells.iter_mut() {
            *cell = rotate_offset(*cell, direction, self.half_cell_pivot);
        }

        if grid.is_position_valid(&self.cells, self.anchor) {
            return true;
        }
        if self.try_wall_kicks(grid) {
            return true;
        }

        self.cells = original;
        false
    }

    /// Try each kick translation in order; the first legal one commits
    /// through the normal move path.
    fn try_wall_kicks(&mut self, grid: &Grid) -> bool {
        let bar_extra: &[GridVec] = if self.shape == ShapeId::I {
            &BAR_KICKS
        } else {
            &[]
        };

        for &kick in WALL_KICKS.iter().chain(bar_extra) {
            if self.try_move(grid, kick) {
                return true;
            }
        }
        false
    }

    /// One of this piece's cells was destroyed by a line clear.
    /// Returns `true` once no cells remain and the piece is spent.
    pub fn reduce_active_count(&mut self) -> bool {
        self.active_cells = self.active_cells.saturating_sub(1);
        self.active_cells == 0
    }
}

/// Rotate a single offset by 90 degrees.
///
/// Ordinary shapes rotate about the cell origin, which is exact in
/// integers. The square and the bar rotate about a point half a cell
/// off; we work in doubled (half-cell) units so the (-0.5, -0.5) shift
/// stays integral, then round up back to whole cells. The ceiling is
/// what produces the bar's symmetric four-cell footprint across its
/// rotation cycle.
fn rotate_offset((x, y): GridVec, direction: i32, half_cell_pivot: bool) -> GridVec {
    if half_cell_pivot {
        let (px, py) = (2 * x - 1, 2 * y - 1);
        let (rx, ry) = (-direction * py, direction * px);
        (ceil_half(rx), ceil_half(ry))
    } else {
        (-direction * y, direction * x)
    }
}

fn ceil_half(v: i32) -> i32 {
    (v + 1).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::shape_data;

    #[test]
    fn plain_rotation_is_exact_quarter_turn() {
        assert_eq!(rotate_offset((1, 0), 1, false), (0, 1));
        assert_eq!(rotate_offset((0, 1), 1, false), (-1, 0));
        assert_eq!(rotate_offset((1, 0), -1, false), (0, -1));
        assert_eq!(rotate_offset((2, 1), 1, false), (-1, 2));
    }

    #[test]
    fn half_cell_rotation_uses_ceiling() {
        // Rotating about (0.5, 0.5): the unit square maps onto itself.
        let square = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let rotated: Vec<_> = square
            .iter()
            .map(|&c| rotate_offset(c, 1, true))
            .collect();
        for cell in &square {
            assert!(rotated.contains(cell), "missing {:?}", cell);
        }
    }

    #[test]
    fn ceil_half_matches_ceiling_of_halves() {
        assert_eq!(ceil_half(1), 1); // 0.5 -> 1
        assert_eq!(ceil_half(-1), 0); // -0.5 -> 0
        assert_eq!(ceil_half(3), 2);
        assert_eq!(ceil_half(-3), -1);
        assert_eq!(ceil_half(4), 2);
    }

    #[test]
    fn four_rotations_restore_offsets() {
        let grid = Grid::new(20, 40); // roomy, no collisions
        for data in crate::core::catalog::all_shapes() {
            for direction in [1, -1] {
                let mut piece = Piece::spawn(data, (0, 0));
                let original: Vec<_> = piece.cells().to_vec();
                for _ in 0..4 {
                    assert!(piece.rotate(&grid, direction), "{:?}", data.shape);
                }
                assert_eq!(piece.cells(), &original[..], "{:?}", data.shape);
                assert_eq!(piece.anchor(), (0, 0), "{:?}", data.shape);
            }
        }
    }

    #[test]
    fn frozen_piece_refuses_movement() {
        let grid = Grid::new(10, 20);
        let mut piece = Piece::spawn(shape_data(ShapeId::T), (0, 0));
        piece.freeze();
        assert!(!piece.try_move(&grid, (0, -1)));
        assert!(!piece.rotate(&grid, 1));
    }

    #[test]
    fn reduce_active_count_reports_spent_piece() {
        let mut piece = Piece::spawn(shape_data(ShapeId::O), (0, 0));
        assert!(!piece.reduce_active_count());
        assert!(!piece.reduce_active_count());
        assert!(!piece.reduce_active_count());
        assert!(piece.reduce_active_count());
        assert_eq!(piece.active_cells(), 0);
    }
}

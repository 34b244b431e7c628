//! Shape catalog: static rest-orientation offsets for every variant.
//!
//! Offsets are relative to the piece anchor, y-up. The catalog is
//! read-only data; rotation mutates a piece's own copy of the offsets,
//! never the catalog.

use crate::types::{GridVec, ShapeId, TileId};

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct ShapeData {
    pub shape: ShapeId,
    /// Rest-orientation cell offsets.
    pub cells: &'static [GridVec],
    /// Visual tile for this shape (opaque to the core).
    pub tile: TileId,
    /// O and I rotate about a point between cells rather than a cell
    /// origin; their offsets get the half-cell pivot treatment.
    pub half_cell_pivot: bool,
}

const I_DATA: ShapeData = ShapeData {
    shape: ShapeId::I,
    cells: &[(-1, 0), (0, 0), (1, 0), (2, 0)],
    tile: TileId(0),
    half_cell_pivot: true,
};

const O_DATA: ShapeData = ShapeData {
    shape: ShapeId::O,
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    tile: TileId(1),
    half_cell_pivot: true,
};

const T_DATA: ShapeData = ShapeData {
    shape: ShapeId::T,
    cells: &[(-1, 0), (0, 0), (1, 0), (0, 1)],
    tile: TileId(2),
    half_cell_pivot: false,
};

const J_DATA: ShapeData = ShapeData {
    shape: ShapeId::J,
    cells: &[(-1, 1), (-1, 0), (0, 0), (1, 0)],
    tile: TileId(3),
    half_cell_pivot: false,
};

const L_DATA: ShapeData = ShapeData {
    shape: ShapeId::L,
    cells: &[(1, 1), (-1, 0), (0, 0), (1, 0)],
    tile: TileId(4),
    half_cell_pivot: false,
};

const S_DATA: ShapeData = ShapeData {
    shape: ShapeId::S,
    cells: &[(0, 1), (1, 1), (-1, 0), (0, 0)],
    tile: TileId(5),
    half_cell_pivot: false,
};

const Z_DATA: ShapeData = ShapeData {
    shape: ShapeId::Z,
    cells: &[(-1, 1), (0, 1), (0, 0), (1, 0)],
    tile: TileId(6),
    half_cell_pivot: false,
};

/// The custom five-cell U shape.
const U_DATA: ShapeData = ShapeData {
    shape: ShapeId::U,
    cells: &[(-1, 1), (-1, 0), (0, 0), (1, 0), (1, 1)],
    tile: TileId(7),
    half_cell_pivot: false,
};

/// Look up the catalog entry for a shape.
pub fn shape_data(shape: ShapeId) -> &'static ShapeData {
    match shape {
        ShapeId::I => &I_DATA,
        ShapeId::O => &O_DATA,
        ShapeId::T => &T_DATA,
        ShapeId::J => &J_DATA,
        ShapeId::L => &L_DATA,
        ShapeId::S => &S_DATA,
        ShapeId::Z => &Z_DATA,
        ShapeId::U => &U_DATA,
    }
}

/// All catalog entries, in enum order.
pub fn all_shapes() -> [&'static ShapeData; 8] {
    [
        &I_DATA, &O_DATA, &T_DATA, &J_DATA, &L_DATA, &S_DATA, &Z_DATA, &U_DATA,
    ]
}

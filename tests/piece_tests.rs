//! Piece behavior against a real board: rotation cycles and wall kicks.

use gridfall::core::{catalog, Board, GameConfig, Grid, Piece, PresetCell};
use gridfall::types::{ShapeId, TileId};

/// Tile used for scaffolding cells in these tests.
const WALL: TileId = TileId(9);

fn board_with(sequence: Vec<ShapeId>, spawn: (i32, i32), preset: Vec<PresetCell>) -> Board {
    let config = GameConfig {
        sequence,
        spawn_position: spawn,
        preset_tiles: preset,
        ..GameConfig::default()
    };
    Board::new(&config)
}

#[test]
fn four_rotations_in_either_direction_restore_every_shape() {
    let grid = Grid::new(30, 30);
    for data in catalog::all_shapes() {
        for direction in [1, -1] {
            let mut piece = Piece::spawn(data, (0, 0));
            let original = piece.cells().to_vec();

            for turn in 1..=4 {
                assert!(
                    piece.rotate(&grid, direction),
                    "{:?} turn {} dir {}",
                    data.shape,
                    turn,
                    direction
                );
            }

            assert_eq!(piece.cells(), &original[..], "{:?}", data.shape);
            assert_eq!(piece.anchor(), (0, 0));
        }
    }
}

#[test]
fn rotation_then_counter_rotation_is_identity() {
    let grid = Grid::new(30, 30);
    for data in catalog::all_shapes() {
        let mut piece = Piece::spawn(data, (0, 0));
        let original = piece.cells().to_vec();

        assert!(piece.rotate(&grid, 1));
        assert!(piece.rotate(&grid, -1));
        assert_eq!(piece.cells(), &original[..], "{:?}", data.shape);
    }
}

#[test]
fn wall_kick_prefers_left_over_right() {
    // A T at the origin. Rotating in place needs (0, -1), which is
    // blocked; both the left and the right kick would succeed, so the
    // committed position proves the candidate ordering.
    let mut board = board_with(
        vec![ShapeId::T],
        (0, 0),
        vec![PresetCell::new(0, -1, WALL)],
    );
    assert_eq!(board.spawn_next(), gridfall::core::SpawnOutcome::Spawned);

    board.unstamp_active();
    assert!(board.rotate_active(1));
    board.stamp_active();

    let piece = board.active_piece().unwrap();
    assert_eq!(piece.anchor(), (-1, 0), "left kick must be tried first");
}

#[test]
fn failed_rotation_reverts_offsets_and_anchor() {
    // Block the in-place rotation and every kick candidate for a T.
    let mut board = board_with(
        vec![ShapeId::T],
        (0, 0),
        vec![
            PresetCell::new(0, -1, WALL),
            PresetCell::new(-1, -1, WALL),
            PresetCell::new(1, -1, WALL),
        ],
    );
    assert_eq!(board.spawn_next(), gridfall::core::SpawnOutcome::Spawned);
    let rest = board.active_piece().unwrap().cells().to_vec();

    board.unstamp_active();
    assert!(!board.rotate_active(1));
    board.stamp_active();

    let piece = board.active_piece().unwrap();
    assert_eq!(piece.cells(), &rest[..]);
    assert_eq!(piece.anchor(), (0, 0));
}

#[test]
fn bar_falls_back_to_its_two_wide_kicks() {
    // Block the vertical bar at the in-place column and at every
    // single-cell kick, plus the (-2, 0) kick; only (+2, 0) is open.
    let mut board = board_with(
        vec![ShapeId::I],
        (0, 0),
        vec![
            PresetCell::new(1, -1, WALL),
            PresetCell::new(0, -1, WALL),
            PresetCell::new(2, -1, WALL),
            PresetCell::new(-1, -1, WALL),
        ],
    );
    assert_eq!(board.spawn_next(), gridfall::core::SpawnOutcome::Spawned);

    board.unstamp_active();
    assert!(board.rotate_active(1));
    board.stamp_active();

    let piece = board.active_piece().unwrap();
    assert_eq!(piece.anchor(), (2, 0));
    // Vertical orientation: one column of four cells.
    let xs: Vec<i32> = piece.cells().iter().map(|&(x, _)| x).collect();
    assert!(xs.iter().all(|&x| x == xs[0]));
}

#[test]
fn move_commits_only_on_valid_positions() {
    let grid = Grid::new(10, 20);
    let mut piece = Piece::spawn(catalog::shape_data(ShapeId::O), (0, 0));

    assert!(piece.try_move(&grid, (1, 0)));
    assert_eq!(piece.anchor(), (1, 0));

    // O at anchor (3, 0) would place a cell at x = 4; x = 5 is out.
    assert!(piece.try_move(&grid, (2, 0)));
    assert_eq!(piece.anchor(), (3, 0));
    assert!(!piece.try_move(&grid, (1, 0)));
    assert_eq!(piece.anchor(), (3, 0));
}

//! FallingPiece integration tests - collision, rotation kicks, locking

use blockfall::core::{Board, FallingPiece};
use blockfall::types::{BlockColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, col: i8, row: i8) -> FallingPiece {
    let mut p = FallingPiece::new(kind, BlockColor::Blue);
    p.col = col;
    p.row = row;
    p
}

fn occupied_count(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn test_collision_against_side_walls() {
    let board = Board::new();
    // T spawn state spans column offsets 0..=2.
    let mut p = piece_at(PieceKind::T, 3, 5);

    assert!(p.try_move(&board, -1, 0));
    assert!(p.try_move(&board, -1, 0));
    assert!(p.try_move(&board, -1, 0));
    assert_eq!(p.col, 0);
    assert!(!p.try_move(&board, -1, 0), "left wall must block");

    while p.try_move(&board, 1, 0) {}
    assert_eq!(p.col, (BOARD_WIDTH as i8) - 3);
}

#[test]
fn test_collision_against_floor_and_settled_cells() {
    let mut board = Board::new();
    // T spans row offsets 1..=2; anchored here its lowest cells sit on the
    // bottom row.
    let p = piece_at(PieceKind::T, 3, (BOARD_HEIGHT as i8) - 3);
    assert!(!p.would_collide(&board, 0, 0));
    assert!(p.would_collide(&board, 0, 1));

    // A settled block directly underneath also blocks the descent.
    let p = piece_at(PieceKind::T, 3, 5);
    board.set(4, 8, Some(BlockColor::Red));
    assert!(!p.would_collide(&board, 0, 0));
    assert!(p.would_collide(&board, 0, 1));
}

#[test]
fn test_rotation_cycle_returns_to_spawn_state() {
    let board = Board::new();
    let mut p = piece_at(PieceKind::T, 3, 5);

    for _ in 0..4 {
        assert!(p.rotate(&board));
    }
    assert_eq!(p.rotation(), 0);
    assert_eq!(p.col, 3, "no kick needed in open space");
    assert_eq!(p.row, 5);
}

#[test]
fn test_rotation_kicks_left_near_right_wall() {
    let board = Board::new();
    // Vertical I at column 8; the horizontal state would poke through the
    // right wall, so the anchor is kicked one cell left.
    let mut p = piece_at(PieceKind::I, 7, 5);

    assert!(p.rotate(&board));
    assert_eq!(p.rotation(), 1);
    assert_eq!(p.col, 6);
}

#[test]
fn test_rotation_kicks_right_near_left_wall() {
    let board = Board::new();
    // Vertical I hugging the left wall (occupies column 0 at anchor -1).
    let mut p = piece_at(PieceKind::I, -1, 5);
    assert!(!p.would_collide(&board, 0, 0));

    assert!(p.rotate(&board));
    assert_eq!(p.rotation(), 1);
    assert_eq!(p.col, 0);
}

#[test]
fn test_rotation_rejected_when_kick_also_collides() {
    let mut board = Board::new();
    // Block the kicked placement too; the rotation must leave the piece
    // exactly as it was.
    board.set(6, 6, Some(BlockColor::Red));
    let mut p = piece_at(PieceKind::I, 7, 5);

    assert!(!p.rotate(&board));
    assert_eq!(p.rotation(), 0);
    assert_eq!(p.col, 7);
    assert_eq!(p.row, 5);
}

#[test]
fn test_lock_writes_exactly_the_occupied_cells() {
    let mut board = Board::new();
    let mut p = piece_at(PieceKind::T, 3, 10);

    assert!(!p.lock(&mut board));
    assert!(p.is_locked());

    assert_eq!(board.get(4, 11), Some(Some(BlockColor::Blue)));
    assert_eq!(board.get(3, 12), Some(Some(BlockColor::Blue)));
    assert_eq!(board.get(4, 12), Some(Some(BlockColor::Blue)));
    assert_eq!(board.get(5, 12), Some(Some(BlockColor::Blue)));
    assert_eq!(occupied_count(&board), 4);
}

#[test]
fn test_lock_entirely_above_grid_reports_top_out() {
    let mut board = Board::new();
    let mut p = FallingPiece::new(PieceKind::O, BlockColor::Green);

    assert!(p.lock(&mut board));
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn test_lock_straddling_the_top_edge() {
    let mut board = Board::new();
    // Vertical I with two cells above row 0 and two below: the visible
    // cells are written, the hidden ones flag the top-out.
    let mut p = piece_at(PieceKind::I, 4, -2);

    assert!(p.lock(&mut board));
    assert_eq!(board.get(5, 0), Some(Some(BlockColor::Blue)));
    assert_eq!(board.get(5, 1), Some(Some(BlockColor::Blue)));
    assert_eq!(occupied_count(&board), 2);
}

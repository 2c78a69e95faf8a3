//! Board tests - grid access, merging and line clears

use tetris_reducer::core::{Board, Tetromino};
use tetris_reducer::types::{Colour, Rotation, Shape, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), GRID_WIDTH);
    assert_eq!(board.height(), GRID_HEIGHT);

    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.cubes().count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(GRID_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, GRID_HEIGHT as i8), None);

    assert!(!board.is_occupied(-1, 5));
    assert!(!board.is_empty_at(-1, 5));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    let cube = Tetromino::spawn(Shape::T, Colour::Red, 0).blocks[0];
    assert!(!board.set(-1, 0, Some(cube)));
    assert!(!board.set(0, GRID_HEIGHT as i8, Some(cube)));
    assert!(board.set(0, 0, Some(cube)));
    assert!(board.set(0, 0, None));
    assert!(board.is_empty_at(0, 0));
}

#[test]
fn test_merge_keeps_piece_identity_and_colour() {
    let mut board = Board::new();
    let piece = Tetromino::new(Shape::O, 1, 19, 9, Colour::Yellow, Rotation::North);
    board.merge(&piece);

    for block in &piece.blocks {
        let cube = board.get(block.x, block.y).flatten().unwrap();
        assert_eq!(cube.id, block.id);
        assert_eq!(cube.colour, Colour::Yellow);
    }
    assert_eq!(
        &board.to_picture()[18..],
        &["##........", "##........"]
    );
}

#[test]
fn test_clear_preserves_column_order_and_identity() {
    let mut board = Board::from_picture(&[
        "#.#.#.....",
        "##########",
        ".#.#.#.#.#",
    ]);
    let before: Vec<_> = board
        .row(17)
        .unwrap()
        .iter()
        .map(|cell| cell.map(|c| c.id))
        .collect();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.rows.len(), 1);

    // Row 17 dropped exactly one row, unchanged left to right
    let after: Vec<_> = board
        .row(18)
        .unwrap()
        .iter()
        .map(|cell| cell.map(|c| c.id))
        .collect();
    assert_eq!(before, after);
    assert_eq!(board.to_picture()[19], ".#.#.#.#.#");
    assert!(board.row(17).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::from_picture(&[
        "....#.....",
        "##########",
        "##########",
        "##########",
        "##########",
    ]);
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.rows.as_slice(), &[16, 17, 18, 19]);
    assert_eq!(cleared.cubes.len(), 4 * GRID_WIDTH as usize);
    assert_eq!(board.cubes().count(), 1);
    assert!(board.is_occupied(4, 19));
}

#[test]
fn test_top_row_occupied() {
    let mut board = Board::new();
    assert!(!board.top_row_occupied());
    board.fill(9, 0, Colour::Lime);
    assert!(board.top_row_occupied());
}

//! Collision predicates over a piece's four block coordinates.
//!
//! All predicates are pure. Border checks ignore the board contents, and the
//! stack check ignores blocks outside the grid.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

const MAX_X: i8 = GRID_WIDTH as i8 - 1;
const MAX_Y: i8 = GRID_HEIGHT as i8 - 1;

pub fn beyond_left_border(piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| b.x < 0)
}

pub fn beyond_right_border(piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| b.x > MAX_X)
}

pub fn beyond_top_border(piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| b.y < 0)
}

pub fn beyond_bottom_border(piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| b.y > MAX_Y)
}

/// True once any block rests on the last row
pub fn is_bottom_grid(piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| b.y >= MAX_Y)
}

/// True if any in-bounds block addresses an occupied board cell
pub fn overlaps_stack(board: &Board, piece: &Tetromino) -> bool {
    piece.blocks.iter().any(|b| board.is_occupied(b.x, b.y))
}

/// A placement that crosses no border and overlaps nothing.
///
/// This is the validity test for rotations, which are not allowed to poke
/// above the top edge either.
pub fn fits(board: &Board, piece: &Tetromino) -> bool {
    !(beyond_left_border(piece)
        || beyond_right_border(piece)
        || beyond_top_border(piece)
        || beyond_bottom_border(piece)
        || overlaps_stack(board, piece))
}

/// Landing test used by the ghost projector
pub fn is_ghost_collision(board: &Board, piece: &Tetromino) -> bool {
    overlaps_stack(board, piece) || beyond_bottom_border(piece)
}

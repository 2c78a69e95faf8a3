//! Rotation module - SRS rotation with wall kicks
//!
//! A rotation turns every block a quarter-turn about the piece pivot, then
//! tries up to five kick offsets in table order. The first placement that
//! [`fits`](crate::geometry::fits) wins; if none does the rotation is rejected.
//!
//! The I piece turns about the corner between four cells rather than a cell
//! centre. Offsets are handled in doubled coordinates so that half-cell pivot
//! never produces a fractional block position.
//!
//! Reference: <https://tetris.wiki/SRS>

use tracing::trace;

use crate::board::Board;
use crate::geometry::fits;
use crate::pieces::Tetromino;
use crate::types::{Shape, Spin};

/// Five `(dx, dy)` candidates, tried in order; the first is always `(0, 0)`
pub type KickRow = [(i8, i8); 5];

/// Kick rows indexed by the rotation state being left
pub type KickTable = [KickRow; 4];

/// J, L, S, T, Z clockwise kicks
const JLSTZ_CW: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// J, L, S, T, Z counter-clockwise kicks
const JLSTZ_CCW: KickTable = [
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I clockwise kicks
const I_CW: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// I counter-clockwise kicks
const I_CCW: KickTable = [
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
];

/// Kick table for a shape class and direction
pub fn kick_table(shape: Shape, spin: Spin) -> &'static KickTable {
    match (shape, spin) {
        (Shape::I, Spin::Cw) => &I_CW,
        (Shape::I, Spin::Ccw) => &I_CCW,
        (_, Spin::Cw) => &JLSTZ_CW,
        (_, Spin::Ccw) => &JLSTZ_CCW,
    }
}

/// Quarter-turn in place with no validity check.
///
/// The O piece keeps its blocks; only its rotation state advances.
pub fn rotated(piece: &Tetromino, spin: Spin) -> Tetromino {
    let mut turned = *piece;
    turned.rotation = piece.rotation.rotate(spin);
    if piece.shape == Shape::O {
        return turned;
    }

    // Doubled offsets from the true centre; odd for I, even otherwise
    let half = if piece.shape == Shape::I { 1 } else { 0 };
    for block in &mut turned.blocks {
        let dx = 2 * (block.x - piece.x) + half;
        let dy = 2 * (block.y - piece.y) + half;
        let (rx, ry) = match spin {
            Spin::Cw => (-dy, dx),
            Spin::Ccw => (dy, -dx),
        };
        block.x = piece.x + (rx - half) / 2;
        block.y = piece.y + (ry - half) / 2;
    }
    turned
}

/// Rotate with wall kicks.
///
/// Returns the placed piece and the kick offset used, or `None` when the
/// shape is O or no candidate fits.
pub fn try_rotate(
    board: &Board,
    piece: &Tetromino,
    spin: Spin,
) -> Option<(Tetromino, (i8, i8))> {
    if piece.shape == Shape::O {
        return None;
    }

    let row = &kick_table(piece.shape, spin)[piece.rotation.index()];
    row.iter().find_map(|&(dx, dy)| {
        let candidate = rotated(&piece.translated(dx, dy), spin);
        fits(board, &candidate).then_some((candidate, (dx, dy)))
    })
}

/// Rotate with wall kicks, keeping the original piece when nothing fits
pub fn rotate(board: &Board, piece: &Tetromino, spin: Spin) -> Tetromino {
    match try_rotate(board, piece, spin) {
        Some((turned, kick)) => {
            trace!(?spin, ?kick, "rotated");
            turned
        }
        None => {
            trace!(?spin, shape = ?piece.shape, "rotation rejected");
            *piece
        }
    }
}

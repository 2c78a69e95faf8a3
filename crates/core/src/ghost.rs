//! Ghost projector - where the active piece would land.
//!
//! Two passes over vertical offsets: scan down for the first placement that
//! hits the stack or the floor, then scan back up from there for the first
//! placement that does not. No per-column height map is needed, and overhangs
//! are handled because every candidate is tested as a whole piece.

use crate::board::Board;
use crate::geometry::is_ghost_collision;
use crate::pieces::Tetromino;
use crate::types::GRID_HEIGHT;

/// Project `piece` straight down onto the stack.
///
/// The result carries ghost block identities. If no landing spot exists (the
/// piece already overlaps the stack) the position is left unchanged.
pub fn project_ghost(board: &Board, piece: &Tetromino) -> Tetromino {
    // Far enough that even a piece spawned above the board passes the floor
    let max_offset = GRID_HEIGHT as i8 - piece.top() + 1;

    let collide_at =
        (0..=max_offset).find(|&dy| is_ghost_collision(board, &piece.translated(0, dy)));
    let landing = collide_at.and_then(|collide| {
        (0..=collide)
            .rev()
            .map(|dy| piece.translated(0, dy))
            .find(|candidate| !is_ghost_collision(board, candidate))
    });

    landing.unwrap_or(*piece).as_ghost()
}

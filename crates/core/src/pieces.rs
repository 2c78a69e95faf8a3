//! Pieces module - tetromino shapes and the piece factory
//!
//! Shapes are stored as four offsets from a pivot, matching the SRS spawn
//! orientation (see <https://tetris.wiki/SRS>). A [`Tetromino`] keeps its blocks
//! in absolute board coordinates, so collision checks never re-derive them.

use crate::rotation::rotated;
use crate::types::{Colour, CubeId, Rotation, Shape, Spin, SPAWN_X, SPAWN_Y};

/// Offset of a single block relative to the piece pivot
pub type BlockOffset = (i8, i8);

/// Spawn-orientation offsets for a shape.
///
/// ```text
/// I: ####     O: ##    T: .#.    J: #..    L: ..#    S: .##    Z: ##.
///                ##       ###       ###       ###       ##.       .##
/// ```
pub fn shape_offsets(shape: Shape) -> [BlockOffset; 4] {
    match shape {
        Shape::I => [(-2, -1), (-1, -1), (0, -1), (1, -1)],
        Shape::O => [(-1, -1), (-1, 0), (0, -1), (0, 0)],
        Shape::T => [(-1, 0), (0, 0), (0, -1), (1, 0)],
        Shape::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        Shape::L => [(-1, 0), (0, 0), (1, 0), (1, -1)],
        Shape::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
        Shape::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

/// A single unit block, either falling or settled on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    pub colour: Colour,
    pub x: i8,
    pub y: i8,
    pub id: CubeId,
}

/// A four-block piece.
///
/// `x`/`y` is the pivot. Blocks are always absolute board coordinates and
/// there are always exactly four of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub id: u32,
    pub shape: Shape,
    pub rotation: Rotation,
    pub colour: Colour,
    pub x: i8,
    pub y: i8,
    pub blocks: [Cube; 4],
}

impl Tetromino {
    /// Build a piece with its pivot at `(x, y)`.
    ///
    /// Non-north rotations are reached by turning the spawn orientation
    /// clockwise, without wall kicks.
    pub fn new(shape: Shape, x: i8, y: i8, id: u32, colour: Colour, rotation: Rotation) -> Self {
        let offsets = shape_offsets(shape);
        let blocks = std::array::from_fn(|i| {
            let (dx, dy) = offsets[i];
            Cube {
                colour,
                x: x + dx,
                y: y + dy,
                id: CubeId::new(id, i as u8),
            }
        });

        let mut piece = Self {
            id,
            shape,
            rotation: Rotation::North,
            colour,
            x,
            y,
            blocks,
        };
        for _ in 0..rotation.index() {
            piece = rotated(&piece, Spin::Cw);
        }
        piece
    }

    /// Build a piece at the spawn pivot in spawn orientation
    pub fn spawn(shape: Shape, colour: Colour, id: u32) -> Self {
        Self::new(shape, SPAWN_X, SPAWN_Y, id, colour, Rotation::North)
    }

    /// Pick shape and colour from a single draw in `[0, 1)`.
    ///
    /// ```
    /// use tetris_reducer_core::Tetromino;
    /// use tetris_reducer_types::{Colour, Shape};
    ///
    /// let piece = Tetromino::random(0.0, 7);
    /// assert_eq!(piece.shape, Shape::I);
    /// assert_eq!(piece.colour, Colour::Goldenrod);
    /// assert_eq!(piece.id, 7);
    /// ```
    pub fn random(draw: f64, id: u32) -> Self {
        let shape = Shape::ALL[pick_index(draw, Shape::ALL.len())];
        let colour = Colour::ALL[pick_index(draw, Colour::ALL.len())];
        Self::spawn(shape, colour, id)
    }

    /// Copy of this piece shifted by `(dx, dy)`, pivot included
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        let mut moved = *self;
        moved.x += dx;
        moved.y += dy;
        for block in &mut moved.blocks {
            block.x += dx;
            block.y += dy;
        }
        moved
    }

    /// Copy with every block identity marked as a ghost overlay
    pub fn as_ghost(&self) -> Self {
        let mut ghost = *self;
        for block in &mut ghost.blocks {
            block.id = block.id.as_ghost();
        }
        ghost
    }

    /// Absolute `(x, y)` of each block
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.blocks.map(|b| (b.x, b.y))
    }

    /// Smallest block row (the top of the piece)
    pub fn top(&self) -> i8 {
        self.blocks.iter().map(|b| b.y).min().unwrap_or(self.y)
    }
}

/// `floor(draw * len)`, clamped into `0..len`
fn pick_index(draw: f64, len: usize) -> usize {
    // float-to-int `as` saturates: negatives and NaN land on 0
    ((draw * len as f64).floor() as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_blocks_around_pivot() {
        let piece = Tetromino::new(Shape::T, 4, 10, 2, Colour::Red, Rotation::North);
        assert_eq!(piece.cells(), [(3, 10), (4, 10), (4, 9), (5, 10)]);
        assert!(piece.blocks.iter().all(|b| b.colour == Colour::Red));
    }

    #[test]
    fn test_block_ids_follow_piece_id() {
        let piece = Tetromino::spawn(Shape::L, Colour::Aqua, 12);
        let ids: Vec<String> = piece.blocks.iter().map(|b| b.id.to_string()).collect();
        assert_eq!(ids, ["12tetro0", "12tetro1", "12tetro2", "12tetro3"]);
    }

    #[test]
    fn test_pick_index_clamps() {
        assert_eq!(pick_index(0.0, 7), 0);
        assert_eq!(pick_index(0.999_999, 7), 6);
        assert_eq!(pick_index(1.0, 7), 6);
        assert_eq!(pick_index(-0.5, 7), 0);
    }

    #[test]
    fn test_random_uses_independent_tables() {
        // 0.5 * 7 = 3.5 -> J; 0.5 * 9 = 4.5 -> SpringGreen
        let piece = Tetromino::random(0.5, 1);
        assert_eq!(piece.shape, Shape::J);
        assert_eq!(piece.colour, Colour::SpringGreen);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.rotation, Rotation::North);
    }

    #[test]
    fn test_random_with_draw_of_one() {
        let piece = Tetromino::random(1.0, 0);
        assert_eq!(piece.shape, Shape::Z);
        assert_eq!(piece.colour, Colour::Crimson);
    }

    #[test]
    fn test_translated_moves_pivot_and_blocks() {
        let piece = Tetromino::spawn(Shape::O, Colour::Yellow, 0);
        let moved = piece.translated(2, 3);
        assert_eq!((moved.x, moved.y), (piece.x + 2, piece.y + 3));
        for (a, b) in piece.blocks.iter().zip(moved.blocks.iter()) {
            assert_eq!((a.x + 2, a.y + 3), (b.x, b.y));
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_new_with_rotation_matches_turned_spawn() {
        let east = Tetromino::new(Shape::T, 4, 4, 0, Colour::Lime, Rotation::East);
        assert_eq!(east.rotation, Rotation::East);
        // T pointing right: stem at (5, 4)
        let mut cells = east.cells();
        cells.sort();
        assert_eq!(cells, [(4, 3), (4, 4), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_spawn_i_sits_above_board() {
        let piece = Tetromino::spawn(Shape::I, Colour::Goldenrod, 0);
        assert_eq!(piece.cells(), [(3, -2), (4, -2), (5, -2), (6, -2)]);
        assert_eq!(piece.top(), -2);
    }
}

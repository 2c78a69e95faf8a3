//! Board module - the settled stack
//!
//! The board is a 10x20 grid of rows, row 0 at the top. Each cell is either
//! empty or holds the settled [`Cube`] that landed there. A stored cube's `x`/`y`
//! always equal the cell's column/row; line clears re-index rows to keep that
//! true.

use arrayvec::ArrayVec;

use crate::pieces::{Cube, Tetromino};
use crate::types::{Colour, CubeId, GRID_HEIGHT, GRID_WIDTH};

/// Number of columns as an index bound
pub const BOARD_COLS: usize = GRID_WIDTH as usize;

/// Number of rows as an index bound
pub const BOARD_ROWS: usize = GRID_HEIGHT as usize;

/// A board cell: empty, or the settled cube occupying it
pub type Cell = Option<Cube>;

/// One row of the board, left to right
pub type Row = [Cell; BOARD_COLS];

/// Result of a line clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedRows {
    /// Indices of the cleared rows, top to bottom, as they were before the clear
    pub rows: ArrayVec<usize, BOARD_ROWS>,
    /// Cubes removed from the board, row by row
    pub cubes: Vec<Cube>,
}

impl ClearedRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; BOARD_ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; BOARD_COLS]; BOARD_ROWS],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(cx, cy)| self.rows[cy][cx])
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Store a cell at (x, y).
    ///
    /// A stored cube's coordinates are overwritten with the cell position.
    /// Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((cx, cy)) => {
                self.rows[cy][cx] = cell.map(|cube| Cube { x, y, ..cube });
                true
            }
            None => false,
        }
    }

    /// Place a loose cube that belongs to no piece.
    ///
    /// Used to build puzzle positions. Loose cubes take identities from the top
    /// of the id space so they never collide with spawned pieces.
    pub fn fill(&mut self, x: i8, y: i8, colour: Colour) -> bool {
        let Some((cx, cy)) = Self::index(x, y) else {
            return false;
        };
        let slot = (cy * BOARD_COLS + cx) as u32;
        let cube = Cube {
            colour,
            x,
            y,
            id: CubeId::new(u32::MAX - slot, 0),
        };
        self.set(x, y, Some(cube))
    }

    pub fn rows(&self) -> &[Row; BOARD_ROWS] {
        &self.rows
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Iterate every settled cube, top row first
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.rows.iter().flat_map(|row| row.iter().flatten())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Any settled cube in row 0 ends the game
    pub fn top_row_occupied(&self) -> bool {
        self.rows[0].iter().any(|cell| cell.is_some())
    }

    /// Write a landed piece's blocks into the board.
    ///
    /// Blocks outside the grid (normally those still above the top edge) are
    /// dropped.
    pub fn merge(&mut self, piece: &Tetromino) {
        for block in &piece.blocks {
            self.set(block.x, block.y, Some(*block));
        }
    }

    /// Remove every full row, shift the rows above down and re-index cube rows.
    ///
    /// Empty rows are inserted at the top, one per cleared row.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::default();
        for y in 0..BOARD_ROWS {
            if self.is_row_full(y) {
                cleared.rows.push(y);
                cleared.cubes.extend(self.rows[y].iter().flatten());
            }
        }
        if cleared.is_empty() {
            return cleared;
        }

        // Compact surviving rows towards the bottom
        let mut write_y = BOARD_ROWS;
        for read_y in (0..BOARD_ROWS).rev() {
            if cleared.rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.rows[write_y] = self.rows[read_y];
            }
        }
        for row in &mut self.rows[..write_y] {
            *row = [None; BOARD_COLS];
        }

        self.reindex_rows();
        cleared
    }

    fn reindex_rows(&mut self) {
        for (y, row) in self.rows.iter_mut().enumerate() {
            for cube in row.iter_mut().flatten() {
                cube.y = y as i8;
            }
        }
    }

    /// Create from a picture, one string per row starting at the top.
    ///
    /// `#` marks an occupied cell; anything else is empty. Missing rows are
    /// taken as empty bottom-aligned padding, so a picture only needs the rows
    /// it cares about.
    pub fn from_picture(lines: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = BOARD_ROWS.saturating_sub(lines.len());
        for (i, line) in lines.iter().enumerate().take(BOARD_ROWS) {
            let y = (offset + i) as i8;
            for (x, ch) in line.chars().enumerate().take(BOARD_COLS) {
                if ch == '#' {
                    board.fill(x as i8, y, Colour::Crimson);
                }
            }
        }
        board
    }

    /// Picture of the board, `#` for settled cubes and `.` for empty cells
    pub fn to_picture(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

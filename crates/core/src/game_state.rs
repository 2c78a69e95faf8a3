//! Game state module - the reducer
//!
//! [`GameState`] is a complete snapshot of a game. It is never mutated in
//! place by callers: [`GameState::apply`] (or [`reduce`]) takes the previous
//! state, an [`Action`] and the draw attached to it, and returns the next state.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::geometry::{beyond_bottom_border, beyond_left_border, beyond_right_border};
use crate::geometry::{is_bottom_grid, overlaps_stack};
use crate::ghost::project_ghost;
use crate::pieces::{Cube, Tetromino};
use crate::rotation;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    current: Tetromino,
    next: Tetromino,
    ghost: Tetromino,
    board: Board,
    score: u32,
    highscore: u32,
    level: u32,
    prev_level: u32,
    rows_cleared: u32,
    /// Identity handed to the most recently spawned piece.
    pieces_created: u32,
    /// Ticks seen since gravity last fired.
    tick_counter: u32,
    game_over: bool,
    /// Draw attached to the most recent action.
    draw: f64,
    // Renderer hints for this step only
    exit_board: Vec<Cube>,
    exit_preview: Option<[Cube; 4]>,
    blocks_created: Vec<Cube>,
}

/// Apply one action to a state.
///
/// ```
/// use tetris_reducer_core::{reduce, GameState};
/// use tetris_reducer_types::Action;
///
/// let state = GameState::new();
/// let moved = reduce(&state, Action::MoveLeft, 0.25);
/// assert_eq!(moved.current().x, state.current().x - 1);
/// assert_eq!(moved.draw(), 0.25);
/// ```
pub fn reduce(state: &GameState, action: Action, draw: f64) -> GameState {
    state.apply(action, draw)
}

impl GameState {
    /// Opening position: an I piece falling, an S piece in preview, empty board
    pub fn new() -> Self {
        let board = Board::new();
        let current = Tetromino::spawn(Shape::I, Colour::Goldenrod, 0);
        let next = Tetromino::spawn(Shape::S, Colour::Fuchsia, 1);
        let ghost = project_ghost(&board, &current);

        Self {
            current,
            next,
            ghost,
            board,
            score: 0,
            highscore: 0,
            level: 1,
            prev_level: 1,
            rows_cleared: 0,
            pieces_created: 1,
            tick_counter: 0,
            game_over: false,
            draw: 0.0,
            exit_board: Vec::new(),
            exit_preview: None,
            blocks_created: Vec::new(),
        }
    }

    /// Replace the board (for puzzles and tests); the ghost follows
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self.ghost = project_ghost(&self.board, &self.current);
        self
    }

    /// Replace the falling piece; the ghost follows
    pub fn with_current(mut self, piece: Tetromino) -> Self {
        self.current = piece;
        self.ghost = project_ghost(&self.board, &self.current);
        self
    }

    /// Replace the preview piece
    pub fn with_next(mut self, piece: Tetromino) -> Self {
        self.next = piece;
        self
    }

    /// Start from a given number of cleared rows, levelled accordingly
    pub fn with_rows_cleared(mut self, rows: u32) -> Self {
        self.rows_cleared = rows;
        self.level = level_for(rows);
        self.prev_level = self.level;
        self
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    pub fn ghost(&self) -> &Tetromino {
        &self.ghost
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn prev_level(&self) -> u32 {
        self.prev_level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_created(&self) -> u32 {
        self.pieces_created
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn draw(&self) -> f64 {
        self.draw
    }

    /// Cubes the renderer should remove after this step
    pub fn exit_board(&self) -> &[Cube] {
        &self.exit_board
    }

    /// Preview cubes to remove after this step, set when the preview piece
    /// was promoted to the board
    pub fn exit_preview(&self) -> Option<&[Cube; 4]> {
        self.exit_preview.as_ref()
    }

    /// Cubes that first appeared (or were re-projected) this step
    pub fn blocks_created(&self) -> &[Cube] {
        &self.blocks_created
    }

    /// Ticks between gravity steps at the current level
    pub fn gravity_interval(&self) -> u32 {
        GRAVITY_BASE_TICKS.saturating_sub(self.level).max(1)
    }

    /// Ticks still needed before gravity next fires
    pub fn ticks_until_gravity(&self) -> u32 {
        self.gravity_interval().saturating_sub(self.tick_counter)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Apply an action, returning the next state.
    ///
    /// The draw is stamped into every resulting state. Once the game is over
    /// only [`Action::Restart`] changes anything else.
    pub fn apply(&self, action: Action, draw: f64) -> Self {
        let mut next = self.clone();
        next.draw = draw;
        next.exit_board.clear();
        next.exit_preview = None;
        next.blocks_created.clear();

        if self.game_over && action != Action::Restart {
            return next;
        }

        match action {
            Action::MoveLeft => next.shift(-1),
            Action::MoveRight => next.shift(1),
            Action::MoveDown => next.move_down(),
            Action::Rotate(spin) => next.rotate(spin),
            Action::Drop => next.drop_to_ghost(),
            Action::Restart => next.restart(),
            Action::Tick => next.tick(),
        }
        next
    }

    fn shift(&mut self, dx: i8) {
        let moved = self.current.translated(dx, 0);
        let blocked = beyond_left_border(&moved)
            || beyond_right_border(&moved)
            || overlaps_stack(&self.board, &moved);

        if blocked {
            trace!(dx, "shift rejected");
        } else {
            self.current = moved;
        }
        self.refresh_ghost();
    }

    fn move_down(&mut self) {
        let moved = self.current.translated(0, 1);
        if beyond_bottom_border(&moved) || overlaps_stack(&self.board, &moved) {
            trace!("move down rejected");
            return;
        }
        self.current = moved;
    }

    fn rotate(&mut self, spin: Spin) {
        if self.current.shape == Shape::O {
            return;
        }
        self.current = rotation::rotate(&self.board, &self.current, spin);
        self.refresh_ghost();
    }

    fn drop_to_ghost(&mut self) {
        let dx = self.ghost.x - self.current.x;
        let dy = self.ghost.y - self.current.y;
        self.current = self.current.translated(dx, dy);
    }

    fn restart(&mut self) {
        if !self.game_over {
            return;
        }

        let board = Board::new();
        let current = Tetromino::random(self.draw, 0);
        let next = Tetromino::random((self.draw + 0.5) % 1.0, 1);
        let ghost = project_ghost(&board, &current);
        info!(highscore = self.highscore, "game restarted");

        let mut blocks_created = Vec::with_capacity(12);
        blocks_created.extend(current.blocks);
        blocks_created.extend(next.blocks);
        blocks_created.extend(ghost.blocks);

        *self = Self {
            current,
            next,
            ghost,
            board,
            score: 0,
            highscore: self.highscore,
            level: 1,
            prev_level: 0,
            rows_cleared: 0,
            pieces_created: 1,
            tick_counter: 0,
            game_over: false,
            draw: self.draw,
            exit_board: Vec::new(),
            exit_preview: None,
            blocks_created,
        };
    }

    /// Rate-limit gravity by level
    fn tick(&mut self) {
        self.tick_counter += 1;
        if self.tick_counter < self.gravity_interval() {
            trace!(tick = self.tick_counter, "gravity gated");
            return;
        }
        self.tick_counter = 0;
        self.gravity_step();
    }

    /// One forced descent: move down, or land, clear rows and spawn
    fn gravity_step(&mut self) {
        if self.board.top_row_occupied() {
            debug!(score = self.score, "stack reached the top");
            self.game_over = true;
            return;
        }

        let down = self.current.translated(0, 1);
        let landed = is_bottom_grid(&self.current)
            || beyond_bottom_border(&down)
            || overlaps_stack(&self.board, &down);

        let mut cleared_cells = 0;
        if landed {
            self.board.merge(&self.current);
            let topped_out = self.board.top_row_occupied();
            let cleared = self.board.clear_full_rows();
            cleared_cells = cleared.cubes.len();
            debug!(
                piece = self.current.id,
                shape = self.current.shape.as_str(),
                rows = cleared.rows.len(),
                "piece landed"
            );

            self.exit_board.extend(cleared.cubes);
            self.exit_preview = Some(self.next.blocks);
            self.pieces_created += 1;
            self.current = self.next;
            self.next = Tetromino::random(self.draw, self.pieces_created);
            self.game_over = topped_out;
            if topped_out {
                debug!(score = self.score, "landed piece reached the top");
            }

            self.blocks_created.extend(self.current.blocks);
            self.blocks_created.extend(self.next.blocks);
        } else {
            self.current = down;
        }
        self.refresh_ghost();

        let cleared_cells = cleared_cells as u32;
        self.score += POINTS_PER_CELL * cleared_cells;
        self.highscore = self.highscore.max(self.score);
        self.rows_cleared += cleared_cells / GRID_WIDTH as u32;
        self.prev_level = self.level;
        self.level = level_for(self.rows_cleared);
    }

    /// Re-project the ghost, recording the swap for the renderer
    fn refresh_ghost(&mut self) {
        self.exit_board.extend(self.ghost.blocks);
        self.ghost = project_ghost(&self.board, &self.current);
        self.blocks_created.extend(self.ghost.blocks);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn level_for(rows_cleared: u32) -> u32 {
    1 + rows_cleared / ROWS_PER_LEVEL
}

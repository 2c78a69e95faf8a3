//! Serializable view of a [`GameState`].
//!
//! Used by the replay tool for its output and by tests that compare whole
//! positions. The board is rendered as a picture, one string per row.

use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::pieces::Tetromino;
use crate::types::{Colour, Rotation, Shape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSnapshot {
    pub id: u32,
    pub shape: Shape,
    pub rotation: Rotation,
    pub colour: Colour,
    pub x: i8,
    pub y: i8,
    pub cells: Vec<(i8, i8)>,
}

impl From<&Tetromino> for PieceSnapshot {
    fn from(piece: &Tetromino) -> Self {
        Self {
            id: piece.id,
            shape: piece.shape,
            rotation: piece.rotation,
            colour: piece.colour,
            x: piece.x,
            y: piece.y,
            cells: piece.cells().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Vec<String>,
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub ghost: PieceSnapshot,
    pub score: u32,
    pub highscore: u32,
    pub level: u32,
    pub prev_level: u32,
    pub rows_cleared: u32,
    pub pieces_created: u32,
    pub tick_counter: u32,
    pub game_over: bool,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().to_picture(),
            current: state.current().into(),
            next: state.next().into(),
            ghost: state.ghost().into(),
            score: state.score(),
            highscore: state.highscore(),
            level: state.level(),
            prev_level: state.prev_level(),
            rows_cleared: state.rows_cleared(),
            pieces_created: state.pieces_created(),
            tick_counter: state.tick_counter(),
            game_over: state.game_over(),
        }
    }
}

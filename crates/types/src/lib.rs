//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types shared by the reducer, the terminal
//! front-end and the replay tool. All types are plain data with no behaviour
//! beyond parsing and simple state transitions.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn pivot**: (`GRID_WIDTH / 2`, -1), one row above the visible board
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE_MS` | 40 | Wall-clock interval between `Tick` actions |
//! | `POINTS_PER_CELL` | 10 | Score per cleared cube |
//! | `ROWS_PER_LEVEL` | 2 | Cleared rows needed per level |
//! | `GRAVITY_BASE_TICKS` | 21 | Gravity fires every `max(1, 21 - level)` ticks |
//!
//! # Examples
//!
//! ```
//! use tetris_reducer_types::{Action, Rotation, Spin, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Rotation::North.rotate(Spin::Cw), Rotation::East);
//!
//! let action = Action::from_str("rotateCcw").unwrap();
//! assert_eq!(action, Action::Rotate(Spin::Ccw));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Interval between gravity ticks generated by the input side, in milliseconds
pub const TICK_RATE_MS: u32 = 40;

/// Spawn column of a new piece's pivot
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8;

/// Spawn row of a new piece's pivot (above the visible board)
pub const SPAWN_Y: i8 = -1;

/// Points awarded per cleared cube
pub const POINTS_PER_CELL: u32 = 10;

/// Cleared rows needed to advance one level
pub const ROWS_PER_LEVEL: u32 = 2;

/// Gravity fires every `max(1, GRAVITY_BASE_TICKS - level)` ticks
pub const GRAVITY_BASE_TICKS: u32 = 21;

/// Seed used when none is configured
pub const DEFAULT_SEED: u32 = 100;

/// The seven tetromino shapes, in the order random spawning indexes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl Shape {
    /// All shapes in spawn-table order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::J,
        Shape::L,
        Shape::S,
        Shape::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::O => "O",
            Shape::T => "T",
            Shape::J => "J",
            Shape::L => "L",
            Shape::S => "S",
            Shape::Z => "Z",
        }
    }
}

/// Block colours, named after the CSS colour keywords they were picked from.
///
/// Colour is chosen independently of shape when a piece spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Goldenrod,
    Red,
    MediumPurple,
    Fuchsia,
    SpringGreen,
    Lime,
    Yellow,
    Aqua,
    Crimson,
}

impl Colour {
    /// All colours in spawn-table order.
    pub const ALL: [Colour; 9] = [
        Colour::Goldenrod,
        Colour::Red,
        Colour::MediumPurple,
        Colour::Fuchsia,
        Colour::SpringGreen,
        Colour::Lime,
        Colour::Yellow,
        Colour::Aqua,
        Colour::Crimson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Colour::Goldenrod => "goldenrod",
            Colour::Red => "red",
            Colour::MediumPurple => "mediumpurple",
            Colour::Fuchsia => "fuchsia",
            Colour::SpringGreen => "springgreen",
            Colour::Lime => "lime",
            Colour::Yellow => "yellow",
            Colour::Aqua => "aqua",
            Colour::Crimson => "crimson",
        }
    }
}

/// Direction of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Cw,
    Ccw,
}

/// Rotation states following the Super Rotation System (SRS)
///
/// - **North**: Spawn orientation (state 0)
/// - **East**: Rotated 90° clockwise (state 1)
/// - **South**: Rotated 180° (state 2)
/// - **West**: Rotated 90° counter-clockwise (state 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetris_reducer_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use tetris_reducer_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn rotate(&self, spin: Spin) -> Self {
        match spin {
            Spin::Cw => self.rotate_cw(),
            Spin::Ccw => self.rotate_ccw(),
        }
    }

    /// Numeric rotation state in `0..=3`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Input events consumed by the reducer.
///
/// Every action is paired with a random draw by the caller; only `Tick`
/// (when it lands a piece) and `Restart` actually consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    MoveDown,
    /// Rotate with SRS wall kicks
    Rotate(Spin),
    /// Jump the piece to its ghost position
    Drop,
    /// Start a new game (only once the current one is over)
    Restart,
    /// Periodic gravity tick, rate-limited by level
    Tick,
}

impl Action {
    /// Parse action from its camelCase name
    ///
    /// ```
    /// use tetris_reducer_types::{Action, Spin};
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("rotateCw"), Some(Action::Rotate(Spin::Cw)));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "movedown" => Some(Action::MoveDown),
            "rotatecw" => Some(Action::Rotate(Spin::Cw)),
            "rotateccw" => Some(Action::Rotate(Spin::Ccw)),
            "drop" => Some(Action::Drop),
            "restart" => Some(Action::Restart),
            "tick" => Some(Action::Tick),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::Rotate(Spin::Cw) => "rotateCw",
            Action::Rotate(Spin::Ccw) => "rotateCcw",
            Action::Drop => "drop",
            Action::Restart => "restart",
            Action::Tick => "tick",
        }
    }
}

/// Stable identity of a single cube.
///
/// Renders as `"{piece}tetro{index}"`, with a `g` prefix for ghost blocks.
/// The identity is assigned when the piece is created and never changes,
/// which lets a renderer reuse the visual element for the same cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeId {
    pub piece: u32,
    pub index: u8,
    pub ghost: bool,
}

impl CubeId {
    pub fn new(piece: u32, index: u8) -> Self {
        Self {
            piece,
            index,
            ghost: false,
        }
    }

    pub fn as_ghost(self) -> Self {
        Self {
            ghost: true,
            ..self
        }
    }
}

impl fmt::Display for CubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ghost {
            f.write_str("g")?;
        }
        write!(f, "{}tetro{}", self.piece, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_column_is_half_width() {
        assert_eq!(SPAWN_X, 5);
        assert_eq!(SPAWN_Y, -1);
    }

    #[test]
    fn rotation_index_follows_clockwise_turns() {
        let mut r = Rotation::North;
        for i in 0..4 {
            assert_eq!(r.index(), i);
            r = r.rotate(Spin::Cw);
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn rotation_cycles_back() {
        let mut r = Rotation::South;
        for _ in 0..4 {
            r = r.rotate(Spin::Ccw);
        }
        assert_eq!(r, Rotation::South);
    }

    #[test]
    fn action_names_parse_back() {
        let all = [
            Action::MoveLeft,
            Action::MoveRight,
            Action::MoveDown,
            Action::Rotate(Spin::Cw),
            Action::Rotate(Spin::Ccw),
            Action::Drop,
            Action::Restart,
            Action::Tick,
        ];
        for action in all {
            assert_eq!(Action::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn action_json_shape() {
        let json = serde_json::to_string(&Action::MoveLeft).unwrap();
        assert_eq!(json, "\"moveLeft\"");

        let rotate: Action = serde_json::from_str(r#"{"rotate":"ccw"}"#).unwrap();
        assert_eq!(rotate, Action::Rotate(Spin::Ccw));
    }

    #[test]
    fn cube_id_display() {
        let id = CubeId::new(3, 2);
        assert_eq!(id.to_string(), "3tetro2");
        assert_eq!(id.as_ghost().to_string(), "g3tetro2");
    }
}

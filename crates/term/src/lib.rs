//! Terminal front-end for the reducer.
//!
//! Rendering is split in two. [`GameView`] paints a [`GameState`](core::GameState)
//! into a [`FrameBuffer`] with no I/O at all, so layouts are unit-testable.
//! [`TerminalRenderer`] owns the terminal and flushes only the cells that
//! changed since the previous frame.
//!
//! Board cells are drawn two columns wide to roughly square them up.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_reducer_core as core;
pub use tetris_reducer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{colour_rgb, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};

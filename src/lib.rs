//! Tetris reducer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binaries, tests
//! and benches can write `tetris_reducer::core::GameState` and so on. Run
//! configuration lives in [`config`].

pub mod config;
pub mod script;

pub use tetris_reducer_core as core;
pub use tetris_reducer_input as input;
pub use tetris_reducer_term as term;
pub use tetris_reducer_types as types;

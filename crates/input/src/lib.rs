//! Terminal input module.
//!
//! Maps `crossterm` key events onto reducer [`Action`](types::Action)s. There is
//! no auto-repeat handling here: one physical press is one action, and
//! terminal key-repeat events are dropped.

pub mod map;

pub use tetris_reducer_types as types;

pub use map::{action_for_key, should_quit};

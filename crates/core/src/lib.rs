//! Core game logic - a pure, deterministic Tetris reducer
//!
//! Everything here is a function of its inputs. The reducer never reads a
//! clock or a random source: each [`Action`](types::Action) arrives with a
//! draw in `[0, 1)`, and the only randomness in the game comes from those
//! draws. Seeding the draw stream ([`rng::Lcg`]) therefore makes whole games
//! replayable.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cubes and line clearing
//! - [`pieces`]: shape offsets, cube identities and the piece factory
//! - [`geometry`]: border and stack collision predicates
//! - [`rotation`]: SRS rotation with wall kicks
//! - [`ghost`]: landing projection for the active piece
//! - [`game_state`]: the state record and the reducer
//! - [`rng`]: seeded LCG draw stream
//! - [`session`]: a state plus its draw stream, and whole-game replay
//! - [`snapshot`]: serializable view of a state
//!
//! # Game Rules
//!
//! | Rule | Behaviour |
//! |------|-----------|
//! | Gravity | Every `max(1, 21 - level)` ticks |
//! | Landing | On the floor or resting on the stack; merges into the board |
//! | Line clear | 10 points per cleared cube |
//! | Level | `1 + rows_cleared / 2` |
//! | Game over | Any settled cube in the top row |
//! | Drop | Jumps to the ghost; the next tick lands it |
//!
//! # Example
//!
//! ```
//! use tetris_reducer_core::Session;
//! use tetris_reducer_types::Action;
//!
//! let mut session = Session::new(100);
//! session.step(Action::MoveRight);
//! session.step(Action::Drop);
//!
//! let state = session.state();
//! assert!(state.current().blocks.iter().all(|b| b.y == 19));
//! assert!(!state.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod ghost;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod session;
pub mod snapshot;

pub use tetris_reducer_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::{reduce, GameState};
pub use ghost::project_ghost;
pub use pieces::{Cube, Tetromino};
pub use rng::Lcg;
pub use session::{replay, Session};
pub use snapshot::{GameSnapshot, PieceSnapshot};

//! Session - owns the draw stream and the current state.
//!
//! Front-ends never call the reducer directly. They hand actions to a
//! [`Session`], which takes the next draw from its [`Lcg`] and folds the action
//! into the state. Two sessions with the same seed fed the same actions end in
//! identical states.

use tracing::{debug, info};

use crate::game_state::GameState;
use crate::rng::Lcg;
use crate::types::Action;

#[derive(Debug, Clone)]
pub struct Session {
    rng: Lcg,
    state: GameState,
    steps: u64,
}

impl Session {
    /// Fresh game with draws from `seed`
    pub fn new(seed: u32) -> Self {
        Self::from_state(seed, GameState::new())
    }

    /// Continue from an arbitrary position
    pub fn from_state(seed: u32, state: GameState) -> Self {
        debug!(seed, "session started");
        Self {
            rng: Lcg::new(seed),
            state,
            steps: 0,
        }
    }

    /// Feed one action through the reducer
    pub fn step(&mut self, action: Action) -> &GameState {
        let draw = self.rng.next_draw();
        let next = self.state.apply(action, draw);
        self.steps += 1;

        if next.game_over() && !self.state.game_over() {
            info!(
                step = self.steps,
                score = next.score(),
                rows = next.rows_cleared(),
                "game over"
            );
        }
        if self.state.game_over() && !next.game_over() {
            info!(step = self.steps, highscore = next.highscore(), "new game");
        }
        if next.rows_cleared() > self.state.rows_cleared() {
            debug!(
                step = self.steps,
                rows = next.rows_cleared() - self.state.rows_cleared(),
                level = next.level(),
                "rows cleared"
            );
        }

        self.state = next;
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Actions applied so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}

/// Run a whole action list from a fresh game.
///
/// ```
/// use tetris_reducer_core::session::replay;
/// use tetris_reducer_types::Action;
///
/// let a = replay(100, [Action::MoveLeft, Action::Tick, Action::Drop]);
/// let b = replay(100, [Action::MoveLeft, Action::Tick, Action::Drop]);
/// assert_eq!(a, b);
/// ```
pub fn replay<I>(seed: u32, actions: I) -> GameState
where
    I: IntoIterator<Item = Action>,
{
    let mut session = Session::new(seed);
    for action in actions {
        session.step(action);
    }
    session.into_state()
}

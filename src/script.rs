//! Replay scripts: a seed plus a list of actions, as JSON.
//!
//! ```json
//! {"seed": 100, "actions": ["moveLeft", {"rotate": "cw"}, "drop", "tick"]}
//! ```
//!
//! `seed` may be omitted and defaults to 100.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{replay, GameState};
use crate::types::{Action, DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default = "default_seed")]
    pub seed: u32,
    pub actions: Vec<Action>,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

impl ReplayScript {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Play the script from a fresh game
    pub fn run(&self) -> GameState {
        debug!(seed = self.seed, actions = self.actions.len(), "replaying script");
        replay(self.seed, self.actions.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Spin;
    use crate::core::Session;

    #[test]
    fn test_parse_mixed_action_forms() {
        let script = ReplayScript::from_json(
            r#"{"seed": 7, "actions": ["moveLeft", {"rotate": "cw"}, {"rotate": "ccw"}, "drop", "tick", "restart"]}"#,
        )
        .unwrap();
        assert_eq!(script.seed, 7);
        assert_eq!(
            script.actions,
            vec![
                Action::MoveLeft,
                Action::Rotate(Spin::Cw),
                Action::Rotate(Spin::Ccw),
                Action::Drop,
                Action::Tick,
                Action::Restart,
            ]
        );
    }

    #[test]
    fn test_seed_defaults() {
        let script = ReplayScript::from_json(r#"{"actions": []}"#).unwrap();
        assert_eq!(script.seed, DEFAULT_SEED);
        assert_eq!(script.run(), GameState::new());
    }

    #[test]
    fn test_run_steps_a_seeded_session() {
        let script = ReplayScript {
            seed: 42,
            actions: vec![Action::Drop, Action::Tick, Action::MoveRight, Action::Tick],
        };
        let mut session = Session::new(42);
        for &action in &script.actions {
            session.step(action);
        }
        assert_eq!(script.run(), session.into_state());
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(ReplayScript::from_json(r#"{"actions": ["hold"]}"#).is_err());
        assert!(ReplayScript::from_json(r#"{"actions": [{"rotate": "left"}]}"#).is_err());
    }
}

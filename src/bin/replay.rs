//! Headless replay.
//!
//! Reads a replay script (see [`tetris_reducer::script`]) from the file named
//! by the first argument, or from stdin, and prints the final position as
//! pretty JSON.
//!
//! ```text
//! echo '{"seed": 100, "actions": ["drop", "tick"]}' | replay
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_reducer::config::RunConfig;
use tetris_reducer::core::GameSnapshot;
use tetris_reducer::script::ReplayScript;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_writer(io::stderr)
        .init();

    let (source, text) = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading replay script {path}"))?;
            (path, text)
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading replay script from stdin")?;
            ("<stdin>".to_string(), text)
        }
    };

    let script = ReplayScript::from_json(&text)
        .with_context(|| format!("parsing replay script {source}"))?;
    let state = script.run();
    info!(
        source = source.as_str(),
        score = state.score(),
        game_over = state.game_over(),
        "replay finished"
    );

    let snapshot = GameSnapshot::from(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

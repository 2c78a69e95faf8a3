//! Terminal Tetris runner (default binary).
//!
//! Key presses and a fixed-rate `Tick` are fed through one [`Session`]; the
//! screen is redrawn from the resulting state after every event. Logs go to a
//! file since the terminal is the game screen.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tetris_reducer::config::RunConfig;
use tetris_reducer::core::Session;
use tetris_reducer::input::{action_for_key, should_quit};
use tetris_reducer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_reducer::types::Action;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    init_logging(&config)?;
    info!(seed = config.seed, tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e}");
    }
    result
}

fn init_logging(config: &RunConfig) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("parsing log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut session = Session::new(config.seed);
    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.state(), Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = action_for_key(key) {
                        session.step(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            session.step(Action::Tick);
        }
    }

    info!(
        steps = session.steps(),
        score = session.state().score(),
        highscore = session.state().highscore(),
        "quit"
    );
    Ok(())
}

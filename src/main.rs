//! Terminal runner (default binary).
//!
//! One loop serializes everything: key presses are dispatched as they arrive,
//! and the gravity tick fires whenever its deadline passes.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::info;

use blockfall::config::RunConfig;
use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::default(),
    };
    info!(seed = game.seed(), tick_ms = config.tick_ms, "game start");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = config.tick_interval();
    let mut next_tick = Instant::now() + tick;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        if now >= next_tick {
            next_tick = now + tick;
            game.tick();
        }
    }
}

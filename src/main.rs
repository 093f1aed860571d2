//! Terminal blockfall runner.
//!
//! Fixed-step loop at 60 logical ticks per second. Elapsed-time drift is
//! carried forward rather than discarded, so ticks are neither dropped nor
//! double-counted on timing jitter. Input events are applied between ticks.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{should_quit, InputHandler};
use blockfall::persist::ScoreStore;
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = ScoreStore::new();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game_state = GameState::new(seed, store.load());

    let view = GameView::default();
    let mut input_handler = InputHandler::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game_state, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick boundary.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(ev) = input_handler.handle_key_press(key.code) {
                            game_state.handle_event(ev);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(ev) = input_handler.handle_key_release(key.code) {
                            game_state.handle_event(ev);
                        }
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick when due, carrying remainder drift into the next interval.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let carry_nanos = elapsed.as_nanos() % tick_duration.as_nanos();
            last_tick = Instant::now() - Duration::from_nanos(carry_nanos as u64);

            if let Some(ev) = input_handler.update() {
                game_state.handle_event(ev);
            }

            game_state.tick();

            if let Some(best) = game_state.take_best_update() {
                // A failed write only costs the record; the game plays on.
                let _ = store.save(best);
            }
        }
    }
}

//! Terminal blockfall runner (default binary).
//!
//! The external driver the engine expects: it owns the descent timer
//! (at-most-one in-flight tick), feeds key commands between ticks, drains
//! engine events into a status line, and renders snapshots.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use blockfall::core::{standard_catalog, GameConfig, GameEngine, GameEvent, GameSnapshot};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{GamePhase, DEFAULT_HEIGHT, DEFAULT_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, standard_catalog())
        .with_seed(clock_seed());
    let mut engine = GameEngine::new(config)?;

    let mut snap = GameSnapshot::default();
    let mut status = String::new();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        drain_events(&mut engine, &mut status);

        engine.snapshot_into(&mut snap);
        let lines = GameView::render_lines(&snap, &status);
        term.draw(&lines)?;

        // Input with timeout until the next tick deadline.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left => {
                            engine.move_left();
                        }
                        KeyCode::Right => {
                            engine.move_right();
                        }
                        KeyCode::Down => {
                            engine.move_down();
                        }
                        KeyCode::Up => {
                            engine.rotate();
                        }
                        KeyCode::Char('p') => {
                            engine.toggle_pause();
                            // Pause stops the timer; resume starts fresh,
                            // no catch-up ticks.
                            last_tick = Instant::now();
                        }
                        KeyCode::Char('r') => {
                            engine.reset();
                            status.clear();
                            last_tick = Instant::now();
                        }
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if engine.phase() == GamePhase::Running {
                engine.tick();
            }
        }
    }
}

/// Map engine events to the status line. Sound-capable frontends would
/// route the same events to audio cues.
fn drain_events(engine: &mut GameEngine, status: &mut String) {
    while let Some(event) = engine.poll_event() {
        match event {
            GameEvent::ShapeSpawned { .. } => {}
            GameEvent::MoveAccepted(_) => {}
            GameEvent::NoRowsCleared => {
                status.clear();
                status.push_str("landed");
            }
            GameEvent::RowsCleared { count, .. } => {
                status.clear();
                status.push_str(&format!(
                    "{} row(s) cleared, +{} points",
                    count,
                    blockfall::types::line_points(count)
                ));
            }
            GameEvent::GameOver => {
                status.clear();
            }
            GameEvent::PausedChanged(_) => {}
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

//! Terminal word-search runner (default binary).
//!
//! Single-threaded event loop: draw, poll input, feed gestures through the
//! selection machine into the session, advance the session clock. The only
//! thing that ever leaves this loop is the fire-and-forget result report.

mod pool;

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event;

use tui_wordsearch::core::{
    generate, GameSession, MatchOutcome, PuzzleConfig, SelectionState, SimpleRng,
};
use tui_wordsearch::input::{map_event, InputSignal};
use tui_wordsearch::reporter::{spawn_report, ReporterConfig};
use tui_wordsearch::term::{draw_error, draw_frame, layout_for, TerminalRenderer, Viewport};
use tui_wordsearch::types::{AppAction, TICK_MS};

/// What the loop is currently showing. A pool failure never builds a session:
/// no grid, no timer, just the error and a way to retry.
enum Screen {
    Error(String),
    Playing {
        session: GameSession,
        selection: SelectionState,
        /// The reporter is invoked at most once per session.
        reported: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let pool_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(pool::DEFAULT_POOL_PATH));
    let reporter = ReporterConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut reports: Vec<JoinHandle<()>> = Vec::new();
    let result = run(&mut term, &pool_path, &reporter, &mut reports);

    // Always try to restore terminal state.
    let _ = term.exit();

    // Let still-pending reports settle (each is bounded by the call
    // timeout); gameplay itself never waits on them.
    for handle in reports {
        let _ = handle.join();
    }
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

/// Build a fresh screen. Replacing the whole value is what invalidates the
/// previous session's clock and found-state; nothing carries over.
fn new_screen(pool_path: &Path) -> Screen {
    let pool = match pool::load_pool(pool_path) {
        Ok(pool) => pool,
        Err(e) => return Screen::Error(format!("{e:#}")),
    };

    let config = PuzzleConfig::default();
    let mut rng = SimpleRng::new(clock_seed());
    let puzzle = generate(&pool, &config, &mut rng);

    let requested = pool.len().min(config.words_per_game);
    if puzzle.placed.len() < requested {
        log::debug!(
            "placed {} of {} requested words, rest skipped",
            puzzle.placed.len(),
            requested
        );
    }

    Screen::Playing {
        session: GameSession::word_search(puzzle),
        selection: SelectionState::new(),
        reported: false,
    }
}

/// Abandon path: flush partial progress once. The session's policy has
/// already nullified bonuses in `final_summary` for incomplete sessions.
fn flush_incomplete(
    screen: &mut Screen,
    reporter: &ReporterConfig,
    reports: &mut Vec<JoinHandle<()>>,
) {
    if let Screen::Playing {
        session, reported, ..
    } = screen
    {
        if !*reported && !session.is_completed() && session.found_count() > 0 {
            *reported = true;
            reports.extend(spawn_report(reporter.clone(), session.final_summary()));
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    pool_path: &Path,
    reporter: &ReporterConfig,
    reports: &mut Vec<JoinHandle<()>>,
) -> Result<()> {
    let mut screen = new_screen(pool_path);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = layout_for(viewport);
        match &screen {
            Screen::Error(message) => {
                term.draw_with(|buf| draw_error(buf, message, viewport))?;
            }
            Screen::Playing {
                session, selection, ..
            } => {
                term.draw_with(|buf| draw_frame(buf, session, selection, &layout))?;
            }
        }

        // Input with timeout until the next clock tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            match map_event(&ev, &layout) {
                Some(InputSignal::App(AppAction::Quit)) => {
                    flush_incomplete(&mut screen, reporter, reports);
                    return Ok(());
                }
                Some(InputSignal::App(AppAction::NewGame)) => {
                    flush_incomplete(&mut screen, reporter, reports);
                    screen = new_screen(pool_path);
                }
                Some(InputSignal::Gesture(gesture)) => {
                    if let Screen::Playing {
                        session,
                        selection,
                        reported,
                    } = &mut screen
                    {
                        if let Some(path) = selection.apply(gesture) {
                            // Match-check, state mutation, completion-check
                            // and report dispatch all happen before the next
                            // event is read.
                            let outcome = session.evaluate(&path);
                            if let MatchOutcome::Matched {
                                completed_now: true,
                                ..
                            } = outcome
                            {
                                if !*reported {
                                    *reported = true;
                                    reports.extend(
                                        spawn_report(reporter.clone(), session.final_summary()),
                                    );
                                }
                            }
                        }
                    }
                }
                None => {}
            }
        }

        // Advance the session clock by real elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            if let Screen::Playing { session, .. } = &mut screen {
                session.tick(elapsed.as_millis() as u64);
            }
        }
    }
}

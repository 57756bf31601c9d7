//! Terminal runner (default binary).
//!
//! Title screen, then a fixed-timestep play loop: poll keys until the next
//! tick is due, feed the collected intents to the engine, draw the snapshot.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{RunConfig, USAGE};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_confirm, is_restart, should_quit, IntentBuffer};
use blockfall::journal::{Journal, JournalRecord};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = RunConfig::from_env();
    config.apply_args(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut journal = Journal::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();

    journal.flush();
    if let Some(msg) = journal.take_failure() {
        eprintln!("[blockfall] event journal disabled: {}", msg);
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Title,
    Playing,
}

/// One play-through, from the first piece to game over.
struct Session {
    game: GameState,
    snap: GameSnapshot,
    game_over_logged: bool,
}

impl Session {
    fn start(config: &RunConfig, journal: &mut Journal) -> Self {
        let game = GameState::new(config.resolve_seed());
        journal.record(&JournalRecord::SessionStart {
            seed: game.seed(),
            tick_ms: config.tick_ms,
        });
        let snap = game.snapshot();
        Self {
            game,
            snap,
            game_over_logged: false,
        }
    }

    fn step(&mut self, elapsed_ms: u32, intents: &IntentBuffer, journal: &mut Journal) {
        self.snap = self.game.tick(elapsed_ms, intents.as_slice());

        if let Some(event) = self.game.take_last_event() {
            journal.record(&JournalRecord::lock(&event, &self.snap));
        }
        if self.snap.game_over && !self.game_over_logged {
            journal.record(&JournalRecord::game_over(&self.snap));
            self.game_over_logged = true;
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, journal: &mut Journal) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut intents = IntentBuffer::new();

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    let mut screen = Screen::Title;
    let mut session: Option<Session> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        match (&session, screen) {
            (Some(s), Screen::Playing) => view.render_into(&s.snap, viewport, &mut fb),
            _ => view.render_title_into(viewport, &mut fb),
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match screen {
                        Screen::Title => {
                            if is_confirm(key) {
                                session = Some(Session::start(config, journal));
                                intents.clear();
                                screen = Screen::Playing;
                            }
                        }
                        Screen::Playing => {
                            if is_restart(key) {
                                session = Some(Session::start(config, journal));
                                intents.clear();
                            } else if let Some(action) = handle_key_event(key) {
                                intents.push(action);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let Some(s) = session.as_mut() {
                s.step(config.tick_ms, &intents, journal);
            }
            intents.clear();
        }
    }
}

//! Terminal snake runner (default binary).
//!
//! Owns the pacing loop: renders, polls input with a timeout derived from
//! the session's current speed, and advances the simulation one tick at a
//! time. Replay re-enters the loop with a freshly built session value.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{Session, SessionConfig, SessionSnapshot, TickEvent};
use tui_snake::input::map_key;
use tui_snake::score::{ScoreStore, DEFAULT_SCORE_FILE};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::Command;

struct Options {
    seed: u32,
    scores: PathBuf,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut seed = clock_seed();
        let mut scores = PathBuf::from(DEFAULT_SCORE_FILE);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let v = args.next().ok_or_else(|| anyhow!("missing value for --seed"))?;
                    seed = v
                        .parse()
                        .map_err(|_| anyhow!("--seed expects an integer, got {v:?}"))?;
                }
                "--scores" => {
                    let v = args
                        .next()
                        .ok_or_else(|| anyhow!("missing value for --scores"))?;
                    scores = PathBuf::from(v);
                }
                other => return Err(anyhow!("unknown argument {other:?}")),
            }
        }

        Ok(Self { seed, scores })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let opts = Options::parse(std::env::args().skip(1))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: &Options) -> Result<()> {
    let store = ScoreStore::new(&opts.scores);
    let mut best = store.read_best();

    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut session = Session::new(SessionConfig {
        seed: opts.seed,
        ..SessionConfig::default()
    });
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let mut fb = view.render(&snap, best, Viewport::new(w, h));
        term.draw(&mut fb)?;

        // Input with timeout until the next tick. The game-over screen has
        // no ticks; idle at a relaxed poll rate instead of spinning.
        let timeout = if session.game_over() {
            Duration::from_millis(250)
        } else {
            session
                .tick_delay()
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                    Some(Command::Quit) => {
                        store.record(session.raw_score())?;
                        return Ok(());
                    }
                    Some(Command::Steer(dir)) => {
                        session.steer(dir);
                    }
                    Some(Command::PlayAgain) if session.game_over() => {
                        // Fresh session value; only the persisted best carries over.
                        session = session.restart();
                        last_tick = Instant::now();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if !session.game_over() && last_tick.elapsed() >= session.tick_delay() {
            last_tick = Instant::now();
            let events = session.tick();
            if events.iter().any(|e| matches!(e, TickEvent::Fatal(_))) {
                best = store.record(session.raw_score())?;
            }
        }
    }
}

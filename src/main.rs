//! Terminal Pacman runner (default binary).
//!
//! Fixed-rate loop: drain input, tick the core, draw the render batch, sleep out
//! the rest of the 16ms frame. A slow frame is not caught up.

use std::fs::File;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_pacman::core::{GameState, RenderBatch};
use tui_pacman::input::{drain_pending, ActionBatch};
use tui_pacman::term::{FrameBuffer, GameView, SpriteSheet, TerminalRenderer, Viewport, DEFAULT_SHEET};
use tui_pacman::types::{TickStatus, TICK_MS, WINDOW_TITLE};

/// Path of the diagnostics log; logging stays off when unset.
const LOG_FILE_ENV: &str = "TUI_PACMAN_LOG";

fn main() -> Result<()> {
    init_tracing()?;

    // Everything fatal happens before the terminal is taken over.
    let seed = clock_seed();
    let mut game = GameState::new(seed).context("failed to build maze")?;
    let sprites = SpriteSheet::load(DEFAULT_SHEET).context("failed to load drawables")?;
    let view = GameView::new(*game.grid(), sprites);
    info!(seed, "session started");

    let mut term = TerminalRenderer::new();
    let result = term
        .enter(WINDOW_TITLE)
        .and_then(|()| run(&mut term, &mut game, &view));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, view: &GameView) -> Result<()> {
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut batch = game.render_batch();
    let mut fb = FrameBuffer::new(0, 0);
    let mut actions = ActionBatch::new();

    loop {
        let started = Instant::now();

        actions.clear();
        if drain_pending(&mut actions)? {
            term.invalidate();
        }

        if game.step(&actions, &mut batch) == TickStatus::Quit {
            info!(ticks = game.tick_count(), dots_left = game.dots_left(), "session ended");
            return Ok(());
        }

        draw(term, view, &batch, &mut fb)?;

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    batch: &RenderBatch,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(batch, Viewport::new(w, h), fb);
    term.present(fb)
}

fn init_tracing() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

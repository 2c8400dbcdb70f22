//! Terminal dungeon crawler (default binary).
//!
//! Usage: `dungeon-view [MAP]`. See [`dungeon_view::config`] for the
//! environment variables.
//!
//! The map is loaded before the terminal is touched, so a bad map is reported
//! on a normal screen. The view is only redrawn when the session is dirty or
//! the terminal was resized.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;

use dungeon_view::config::SessionConfig;
use dungeon_view::core::{load_map_from_path, Session};
use dungeon_view::input::{handle_key_event, should_quit};
use dungeon_view::logging;
use dungeon_view::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = SessionConfig::from_env().with_args(std::env::args().skip(1));
    if let Some(path) = &config.log_path {
        logging::init(path, config.log_level)?;
    }

    let map = load_map_from_path(&config.map_path)
        .with_context(|| format!("failed to load map {}", config.map_path.display()))?;
    log::info!(
        "starting on {} ({}x{}), seed {}",
        config.map_path.display(),
        map.width(),
        map.height(),
        config.seed
    );

    let mut session = Session::new(map, config.seed);
    if session.current_tile().is_wall() {
        log::warn!(
            "start position {:?} is inside a wall",
            session.player().position()
        );
    }
    session.mark_dirty();
    let mut view = GameView::new(config.sweep_options());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut view, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => log::info!("session over with {} gold", session.gold()),
        Err(e) => log::error!("session failed: {:#}", e),
    }
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, view: &mut GameView, session: &mut Session) -> Result<()> {
    let (mut width, mut height) = terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(width, height);

    loop {
        if session.is_dirty() {
            view.render_into(session, Viewport::new(width, height), &mut fb);
            term.draw_swap(&mut fb)?;
            session.mark_clean();
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if !session.apply_action(action) {
                    log::debug!("{} had no effect", action.as_str());
                }
                for happened in session.take_events() {
                    log::info!("{}", happened.message());
                }
            }
            Event::Resize(w, h) => {
                width = w;
                height = h;
                term.invalidate();
                session.mark_dirty();
            }
            _ => {}
        }
    }
}

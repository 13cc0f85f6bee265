//! Terminal blockfall runner (default binary).
//!
//! Polls crossterm for input, feeds elapsed time through the engine's
//! fixed-step clock and redraws through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{GameEngine, HostSignal};
use blockfall::host::on_key;
use blockfall::input::{should_quit, HeldKeys};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FIXED_STEP_SECS;
use blockfall::{EventLog, EventRecord, HostConfig};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    let mut log = match &config.event_log_path {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    let reports_releases = term.enter()?;

    let result = run(&mut term, &config, reports_releases, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &HostConfig,
    reports_releases: bool,
    log: &mut EventLog,
) -> Result<()> {
    let mut engine = GameEngine::new(config.seed);
    log.record(&EventRecord::SessionStart { seed: config.seed });

    // With real release events there is nothing to time out.
    let timeout_ms = if reports_releases {
        0
    } else {
        config.key_release_timeout_ms
    };
    let mut held = HeldKeys::new().with_key_release_timeout_ms(timeout_ms);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_secs_f64(FIXED_STEP_SECS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), engine.menu(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Wait for input until the next frame is due, then drain the rest.
        let mut timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            timeout = Duration::ZERO;
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if on_key(&mut engine, &mut held, log, key)? == HostSignal::Shutdown {
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        engine.advance(delta, &held.held());
        if let Some(lock) = engine.take_last_event() {
            log.record(&EventRecord::from(lock));
        }
        held.end_frame();
    }
}

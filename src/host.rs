//! Routing of terminal key events into the engine.
//!
//! Only press edges reach the engine. A keydown for a key that is already
//! held (terminal auto-repeat, or a `Repeat` event from terminals that report
//! event kinds) just refreshes the held set; the engine repeats held movement
//! keys on its own cadence from that set.

use std::io::Write;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::{GameEngine, HostSignal, MenuSelection};
use crate::event_log::{EventLog, EventRecord};
use crate::input::{is_release, map_key, HeldKeys};
use crate::types::{EngineState, Key};

/// Feed one terminal key event to the engine.
pub fn on_key<W: Write>(
    engine: &mut GameEngine,
    held: &mut HeldKeys,
    log: &mut EventLog<W>,
    event: KeyEvent,
) -> Result<HostSignal> {
    let before = engine.state();
    let Some(key) = map_key(event, before) else {
        return Ok(HostSignal::Continue);
    };

    if is_release(event) {
        held.release(key);
        return Ok(HostSignal::Continue);
    }

    let is_edge = held.press(key);
    if !is_edge || event.kind == KeyEventKind::Repeat {
        return Ok(HostSignal::Continue);
    }

    if let Some(selection) = pending_menu_choice(engine, key) {
        log.record(&EventRecord::from(selection));
    }

    let signal = engine.on_key_down(key, false)?;

    let after = engine.state();
    if after != before {
        log.record(&EventRecord::state_change(before, after));
        // The same physical key maps to a different logical key now.
        held.clear();
    }
    Ok(signal)
}

/// The menu choice `key` is about to confirm, if any.
fn pending_menu_choice(engine: &GameEngine, key: Key) -> Option<MenuSelection> {
    if engine.state() != EngineState::Menu {
        return None;
    }
    let mut menu = engine.menu().clone();
    match key {
        Key::MenuConfirm => {}
        Key::Escape => menu.select_first(),
        _ => return None,
    }
    menu.choose().ok()
}

//! JSONL event log.
//!
//! One JSON object per line, tagged by `type`. The log is strictly a side
//! channel: the first failed write closes it and the game carries on.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::MenuSelection;
use crate::types::{EngineState, LockEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    SessionStart {
        seed: u32,
    },
    MenuChoice {
        choice: &'static str,
        speed: f64,
    },
    StateChange {
        from: &'static str,
        to: &'static str,
    },
    Lock {
        piece: &'static str,
        cells: [(i8, i8); 4],
        lines_cleared: u32,
    },
}

impl EventRecord {
    pub fn state_change(from: EngineState, to: EngineState) -> Self {
        EventRecord::StateChange {
            from: from.as_str(),
            to: to.as_str(),
        }
    }
}

impl From<MenuSelection> for EventRecord {
    fn from(value: MenuSelection) -> Self {
        EventRecord::MenuChoice {
            choice: value.choice.as_str(),
            speed: value.speed,
        }
    }
}

impl From<LockEvent> for EventRecord {
    fn from(value: LockEvent) -> Self {
        EventRecord::Lock {
            piece: value.kind.as_str(),
            cells: value.cells,
            lines_cleared: value.lines_cleared,
        }
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, record: &EventRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }

    /// Take back the writer, if the log is still open.
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

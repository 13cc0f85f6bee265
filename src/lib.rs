//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the pieces of the
//! terminal host that are not tied to a terminal: runtime configuration, key
//! routing and the JSONL event log.

pub mod config;
pub mod event_log;
pub mod host;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::HostConfig;
pub use event_log::{EventLog, EventRecord};

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into the engine's logical [`crate::types::Key`]s
//! and tracks which keys are currently held, including on terminals that never
//! report key releases.

pub mod held;
pub mod map;

pub use blockfall_types as types;

pub use held::HeldKeys;
pub use map::{is_release, map_key, map_key_code, should_quit};

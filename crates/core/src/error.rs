//! Errors raised when raw values enter the core.
//!
//! Inside the engine piece types, rotations and menu choices are enums, so
//! these can only come from a caller handing over an id or a name that does not
//! exist. They are programmer errors: hosts are expected to abort on them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown piece type {0} (expected 1..=7)")]
    UnknownPieceType(u8),

    #[error("unknown rotation state {0} (expected 1..=4)")]
    UnknownRotation(u8),

    #[error("invalid menu choice: {0:?}")]
    UnknownMenuChoice(String),

    #[error("invalid speed: {0:?}")]
    UnknownSpeed(String),
}

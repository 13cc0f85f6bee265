//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block simulation. It has no
//! dependencies on terminals, windows or I/O: a host feeds it elapsed time,
//! key presses and menu choices, and reads back a [`FrameSnapshot`] to draw.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells
//! - [`collision`]: bounds and overlap checks for a set of cells
//! - [`line_clear`]: full-row removal with gravity for the rows above
//! - [`pieces`]: tetromino shape table
//! - [`rng`]: seeded uniform piece selection
//! - [`clock`]: fixed-timestep accumulators for gravity and key-repeat
//! - [`menu`]: menu items, navigation and confirmation
//! - [`game_state`]: the engine state machine tying it all together
//! - [`snapshot`]: read-only per-frame view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameEngine, MenuChoice};
//! use blockfall_core::types::{EngineState, Key};
//!
//! let mut engine = GameEngine::new(12345);
//! engine.on_menu_choice(MenuChoice::Play, 2.0);
//! assert_eq!(engine.state(), EngineState::Playing);
//!
//! engine.on_key_down(Key::Left, false).unwrap();
//! engine.advance(0.5, &[]);
//!
//! let snapshot = engine.snapshot();
//! assert!(snapshot.active.is_some());
//! ```
//!
//! # Timing
//!
//! Time advances in 1/60 s steps. At speed `s` the engine is stepped every
//! `60 / s` frames and held movement keys repeat every `60 / s / 2.5` frames.
//! Call [`GameEngine::advance`] every host frame with the elapsed seconds.

pub mod board;
pub mod clock;
pub mod collision;
pub mod error;
pub mod game_state;
pub mod line_clear;
pub mod menu;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GameClock;
pub use collision::{is_colliding, is_out_of_bounds};
pub use error::CoreError;
pub use game_state::{ActivePiece, EngineStats, GameEngine, HostSignal, StepOutcome};
pub use line_clear::{clear_full_rows, LineClear};
pub use menu::{Menu, MenuChoice, MenuItem, MenuSelection, MultipleChoice, SingleChoice};
pub use pieces::{get_shape, shape_by_id, PieceShape};
pub use rng::{PieceRandomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, FrameSnapshot};

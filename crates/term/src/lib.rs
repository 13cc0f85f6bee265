//! Terminal "game renderer" module.
//!
//! Renders a [`blockfall_core::FrameSnapshot`] and the menu into a character
//! framebuffer, then flushes only the changed cells to the terminal. Each
//! board cell is two columns wide to make up for the usual glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Collision detection for candidate piece placements.
//!
//! A placement is illegal when any cell leaves the left, right or bottom edge
//! of the board, or lands on a settled block. There is no top bound: pieces may
//! spawn or rotate partly above row 0.

use crate::board::Board;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether a single cell is outside the playable area.
#[inline]
pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
    x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8
}

/// Whether placing `cells` on `board` is illegal.
pub fn is_colliding(cells: &[(i8, i8)], board: &Board) -> bool {
    cells
        .iter()
        .any(|&(x, y)| is_out_of_bounds(x, y) || board.is_occupied(x, y))
}

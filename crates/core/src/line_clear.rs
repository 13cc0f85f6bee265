//! Line clearing - detect full rows and compact the board.
//!
//! One pass counts occupied cells per row, a reverse scan computes how many
//! full rows lie strictly below each row, and every surviving row is copied
//! down by that amount. No sorting, O(H + N).

use arrayvec::ArrayVec;

use crate::board::{Board, BOARD_SIZE};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const HEIGHT: usize = BOARD_HEIGHT as usize;
const WIDTH: usize = BOARD_WIDTH as usize;

/// Result of compacting a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    /// The compacted board.
    pub board: Board,
    /// Number of full rows removed.
    pub lines_cleared: usize,
    /// Indices of the removed rows in the original board, bottom to top.
    pub cleared_rows: ArrayVec<u8, HEIGHT>,
}

/// Remove every full row from `board` and drop the rows above into the gaps.
pub fn clear_full_rows(board: &Board) -> LineClear {
    let mut full = [false; HEIGHT];
    for (y, is_full) in full.iter_mut().enumerate() {
        *is_full = board.row_count(y as i8) == WIDTH;
    }

    // shift[y] = number of full rows strictly below row y.
    let mut shift = [0usize; HEIGHT];
    let mut cleared_rows = ArrayVec::new();
    let mut below = 0usize;
    for y in (0..HEIGHT).rev() {
        shift[y] = below;
        if full[y] {
            below += 1;
            cleared_rows.push(y as u8);
        }
    }

    if below == 0 {
        return LineClear {
            board: board.clone(),
            lines_cleared: 0,
            cleared_rows,
        };
    }

    let src = board.cells();
    let mut cells = [None; BOARD_SIZE];
    for y in (0..HEIGHT).filter(|&y| !full[y]) {
        let dst = (y + shift[y]) * WIDTH;
        cells[dst..dst + WIDTH].copy_from_slice(&src[y * WIDTH..(y + 1) * WIDTH]);
    }

    LineClear {
        board: Board::from_flat(cells),
        lines_cleared: below,
        cleared_rows,
    }
}

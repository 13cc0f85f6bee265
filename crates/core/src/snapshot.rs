use crate::game_state::ActivePiece;
use crate::types::{EngineState, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_SPEED};

/// Read-only view of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute cells, possibly above row 0.
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Piece ids per cell, 0 = empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub state: EngineState,
    pub speed: f64,
}

impl FrameSnapshot {
    pub fn occupied_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&id| id != 0).count()
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            state: EngineState::Menu,
            speed: DEFAULT_SPEED,
        }
    }
}

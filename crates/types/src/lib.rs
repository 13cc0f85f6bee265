//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the simulation core, the input layer and the
//! terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (5, 0), i.e. `(BOARD_WIDTH / 2, 0)`
//!
//! # Timing
//!
//! The simulation runs at a fixed 60 Hz. Gravity and key-repeat are counted in
//! frames:
//!
//! | Quantity | Value |
//! |----------|-------|
//! | fixed step | `1 / 60` s |
//! | fall threshold | `60 / speed` frames |
//! | move-repeat threshold | `fall threshold / 2.5` frames |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{fall_threshold_frames, PieceKind, Rotation, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(2), Some(PieceKind::O));
//! assert_eq!(Rotation::West.next(), Rotation::North);
//! assert_eq!(fall_threshold_frames(2.0), 30.0);
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Simulation frames per second.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Fixed timestep in seconds (1/60 s).
pub const FIXED_STEP_SECS: f64 = 1.0 / FRAMES_PER_SECOND;

/// Tolerance used when comparing banked time against the fixed step, so that
/// e.g. exactly 0.5 s of input yields 30 steps despite float rounding.
pub const FIXED_STEP_EPSILON_SECS: f64 = 1e-9;

/// Key-repeat runs this many times faster than gravity.
pub const MOVE_REPEAT_DIVISOR: f64 = 2.5;

/// Speed used before the first menu choice.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Speed labels offered by the menu and the fall-speed multiplier each one selects.
pub const SPEED_TABLE: [(&str, f64); 3] = [("1", 2.0), ("2", 4.0), ("3", 6.0)];

/// Anchor of every freshly spawned piece.
pub const SPAWN_ANCHOR: (i8, i8) = ((BOARD_WIDTH / 2) as i8, 0);

/// Frames between two gravity updates at the given speed.
pub fn fall_threshold_frames(speed: f64) -> f64 {
    FRAMES_PER_SECOND / speed
}

/// Frames between two key-repeat moves at the given speed.
pub fn move_threshold_frames(speed: f64) -> f64 {
    fall_threshold_frames(speed) / MOVE_REPEAT_DIVISOR
}

/// Look up the speed multiplier for a menu label.
pub fn speed_for_label(label: &str) -> Option<f64> {
    SPEED_TABLE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, speed)| speed)
}


/// The seven tetromino piece kinds, numbered 1..=7.
///
/// The numbering is part of the data model: shape tables and snapshots refer
/// to pieces by id, and `0` is reserved for an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I = 1,
    O = 2,
    J = 3,
    L = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric id in `1..=7`.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Parse a numeric id; `None` outside `1..=7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(7), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_id(9), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::L),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states 1..=4.
///
/// Rotation only ever advances: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Numeric state in `1..=4`.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Rotation::North),
            2 => Some(Rotation::East),
            3 => Some(Rotation::South),
            4 => Some(Rotation::West),
            _ => None,
        }
    }

    /// The next state, `(r % 4) + 1`.
    pub fn next(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Logical keys the engine understands.
///
/// Hosts translate physical keys into these; the same physical key can map to
/// different logical keys in the menu and during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Rotate,
    Escape,
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuConfirm,
}

impl Key {
    /// The movement this key triggers during play, if any.
    ///
    /// Rotate has no direction and never key-repeats.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Left => "left",
            Key::Right => "right",
            Key::Down => "down",
            Key::Rotate => "rotate",
            Key::Escape => "escape",
            Key::MenuUp => "menuUp",
            Key::MenuDown => "menuDown",
            Key::MenuLeft => "menuLeft",
            Key::MenuRight => "menuRight",
            Key::MenuConfirm => "menuConfirm",
        }
    }
}

/// One-cell translation of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Anchor offset `(dx, dy)`; y grows downwards.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Top-level engine state.
///
/// `Lost` and `Won` exist in the model but no rule currently reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    #[default]
    Menu,
    Playing,
    Lost,
    Won,
}

impl EngineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Menu => "menu",
            EngineState::Playing => "playing",
            EngineState::Lost => "lost",
            EngineState::Won => "won",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Settled block; the kind is kept for color only
pub type Cell = Option<PieceKind>;

/// Emitted by the engine each time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Absolute cells the piece occupied when it locked.
    pub cells: [(i8, i8); 4],
    pub lines_cleared: u32,
}

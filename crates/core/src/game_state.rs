//! Game state module - the engine state machine
//!
//! Ties together the board, the active piece, the clock, the menu and the
//! piece randomizer. Every piece mutation follows the same pattern: build a
//! candidate, check it for collisions, then either replace the active piece or
//! leave everything untouched.

use crate::clock::GameClock;
use crate::collision::is_colliding;
use crate::error::CoreError;
use crate::line_clear::clear_full_rows;
use crate::menu::{Menu, MenuChoice};
use crate::pieces::{get_shape, place, PieceShape};
use crate::rng::PieceRandomizer;
use crate::snapshot::{ActiveSnapshot, FrameSnapshot};
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A new piece at the spawn anchor in rotation 1
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_ANCHOR.0,
            y: SPAWN_ANCHOR.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        place(&self.shape(), self.x, self.y)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same anchor, next rotation state
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.next(),
            ..*self
        }
    }
}

/// Signal for the window/event-loop collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Continue,
    Shutdown,
}

/// What a gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No active piece.
    Idle,
    /// The piece moved down one row.
    Fell,
    /// The piece could fall but this step was not a falling one.
    Held,
    /// The piece could not fall; it merged into the board and a new piece spawned.
    Locked { lines_cleared: usize },
}

/// Counters over the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    pub steps: u64,
    pub pieces_locked: u64,
    pub lines_cleared: u64,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    clock: GameClock,
    menu: Menu,
    state: EngineState,
    stats: EngineStats,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    shutdown_requested: bool,
}

impl GameEngine {
    /// Create an engine in the menu, seeding the piece randomizer once.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            randomizer: PieceRandomizer::new(seed),
            clock: GameClock::default(),
            menu: Menu::main_menu(),
            state: EngineState::Menu,
            stats: EngineStats::default(),
            last_event: None,
            shutdown_requested: false,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut FrameSnapshot) {
        self.board.write_id_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.state = self.state;
        out.speed = self.clock.speed();
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let mut s = FrameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a confirmed menu choice.
    pub fn on_menu_choice(&mut self, choice: MenuChoice, speed: f64) -> HostSignal {
        match choice {
            MenuChoice::Play | MenuChoice::Restart | MenuChoice::Speed => {
                self.board.clear();
                self.last_event = None;
                self.spawn_piece();
                self.clock.set_speed(speed);
                self.clock.reset();
                self.state = EngineState::Playing;
                HostSignal::Continue
            }
            MenuChoice::Quit => {
                self.shutdown_requested = true;
                HostSignal::Shutdown
            }
        }
    }

    /// Apply a menu choice given by name; unknown names are rejected.
    pub fn on_menu_choice_named(
        &mut self,
        name: &str,
        speed: f64,
    ) -> Result<HostSignal, CoreError> {
        let choice = MenuChoice::from_name(name)?;
        Ok(self.on_menu_choice(choice, speed))
    }

    /// Handle a key-down event.
    ///
    /// `is_repeat` is true when the key was already held (auto-repeat). Menu
    /// navigation, Escape and Rotate only react to fresh presses; movement
    /// keys react to both.
    pub fn on_key_down(&mut self, key: Key, is_repeat: bool) -> Result<HostSignal, CoreError> {
        match self.state {
            EngineState::Playing => {
                match key {
                    Key::Escape if !is_repeat => self.state = EngineState::Menu,
                    Key::Rotate if !is_repeat => {
                        self.rotate(true);
                    }
                    _ => {
                        if let Some(direction) = key.direction() {
                            self.move_piece(direction);
                        }
                    }
                }
                Ok(HostSignal::Continue)
            }
            EngineState::Menu if !is_repeat => self.on_menu_key(key),
            _ => Ok(HostSignal::Continue),
        }
    }

    fn on_menu_key(&mut self, key: Key) -> Result<HostSignal, CoreError> {
        match key {
            Key::MenuUp => self.menu.select_up(),
            Key::MenuDown => self.menu.select_down(),
            Key::MenuLeft => self.menu.select_left(),
            Key::MenuRight => self.menu.select_right(),
            Key::MenuConfirm => return self.confirm_menu(),
            Key::Escape => {
                self.menu.select_first();
                return self.confirm_menu();
            }
            _ => {}
        }
        Ok(HostSignal::Continue)
    }

    fn confirm_menu(&mut self) -> Result<HostSignal, CoreError> {
        let selection = self.menu.choose()?;
        Ok(self.on_menu_choice(selection.choice, selection.speed))
    }

    /// Move the active piece one cell.
    ///
    /// Restarts the key-repeat countdown, and the gravity countdown for a
    /// down-move, even when the move itself is rejected.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        self.clock.reset_move();
        if direction == Direction::Down {
            self.clock.reset_fall();
        }

        let Some(active) = self.active else {
            return false;
        };
        let (dx, dy) = direction.offset();
        self.try_replace(active.shifted(dx, dy))
    }

    /// Advance the active piece to its next rotation state.
    ///
    /// The direction flag is accepted for interface stability; rotation always
    /// advances forward (1 → 2 → 3 → 4 → 1).
    pub fn rotate(&mut self, _clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.rotated())
    }

    fn try_replace(&mut self, candidate: ActivePiece) -> bool {
        if is_colliding(&candidate.cells(), &self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// One gravity step: fall if allowed, lock if the piece cannot descend.
    pub fn step(&mut self, should_fall: bool) -> StepOutcome {
        let Some(active) = self.active else {
            return StepOutcome::Idle;
        };
        self.stats.steps += 1;

        let candidate = active.shifted(0, 1);
        if is_colliding(&candidate.cells(), &self.board) {
            let lines_cleared = self.lock_piece(active);
            return StepOutcome::Locked { lines_cleared };
        }

        if should_fall {
            self.active = Some(candidate);
            StepOutcome::Fell
        } else {
            StepOutcome::Held
        }
    }

    /// Merge `piece` into the board, clear full rows and spawn the next piece.
    fn lock_piece(&mut self, piece: ActivePiece) -> usize {
        let cells = piece.cells();
        self.board.merge(&cells, piece.kind);

        let cleared = clear_full_rows(&self.board);
        let lines_cleared = cleared.lines_cleared;
        self.board = cleared.board;

        self.stats.pieces_locked += 1;
        self.stats.lines_cleared += lines_cleared as u64;
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            cells,
            lines_cleared: lines_cleared as u32,
        });

        self.spawn_piece();
        lines_cleared
    }

    /// Replace the active piece with a fresh random one at the spawn anchor.
    ///
    /// The spawn is not collision-checked: on a board filled up to the spawn
    /// area the new piece overlaps and locks in place on the next step.
    pub fn spawn_piece(&mut self) {
        let kind = self.randomizer.draw();
        self.active = Some(ActivePiece::spawn(kind));
    }

    /// Feed elapsed wall-clock time through the fixed-step loop.
    ///
    /// `held` is the set of keys currently held down; its movement keys are
    /// re-applied whenever key-repeat is due. Returns the number of fixed
    /// steps run. Time only advances while playing.
    pub fn advance(&mut self, delta_secs: f64, held: &[Key]) -> u32 {
        if self.state != EngineState::Playing {
            return 0;
        }

        self.clock.bank(delta_secs);
        let mut frames = 0;
        while self.clock.take_step() {
            frames += 1;

            if self.clock.begin_frame() {
                for direction in held.iter().filter_map(|key| key.direction()) {
                    self.move_piece(direction);
                }
            }

            if let Some(should_fall) = self.clock.gravity_due() {
                self.step(should_fall);
            }
        }
        frames
    }

    /// Place a specific piece, for tests and tooling.
    ///
    /// Bypasses the randomizer and does not collision-check, like a spawn.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Mutable board access for tests and tooling.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

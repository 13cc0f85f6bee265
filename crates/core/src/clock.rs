//! Fixed-timestep clock driving gravity and key-repeat.
//!
//! Wall-clock time is banked into `time_accumulator` and paid out in 1/60 s
//! steps. Every step advances three frame counters:
//!
//! - `move_frames`: key-repeat, due every `fall_threshold / 2.5` frames
//! - `fall_frames`: frames since the piece last fell (reset by a manual down-move)
//! - `update_frames`: frames since the engine was last stepped
//!
//! The engine is stepped every `fall_threshold` frames; the step only moves the
//! piece down when `fall_frames` has also reached the threshold, which lets a
//! manual down-move postpone the next automatic fall while still checking for
//! a lock on schedule.
//!
//! ```
//! use blockfall_core::GameClock;
//!
//! let mut clock = GameClock::new(2.0);
//! clock.bank(0.5);
//! let mut gravity_steps = 0;
//! while clock.take_step() {
//!     clock.begin_frame();
//!     if clock.gravity_due() == Some(true) {
//!         gravity_steps += 1;
//!     }
//! }
//! assert_eq!(gravity_steps, 1);
//! ```

use crate::types::{
    fall_threshold_frames, move_threshold_frames, DEFAULT_SPEED, FIXED_STEP_EPSILON_SECS,
    FIXED_STEP_SECS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    speed: f64,
    /// Banked wall-clock time in seconds.
    time_accumulator: f64,
    move_frames: f64,
    fall_frames: f64,
    update_frames: f64,
}

impl GameClock {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            time_accumulator: 0.0,
            move_frames: 0.0,
            fall_frames: 0.0,
            update_frames: 0.0,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Frames between engine steps at the current speed.
    pub fn fall_threshold(&self) -> f64 {
        fall_threshold_frames(self.speed)
    }

    /// Frames between key-repeat moves at the current speed.
    pub fn move_threshold(&self) -> f64 {
        move_threshold_frames(self.speed)
    }

    pub fn time_accumulator(&self) -> f64 {
        self.time_accumulator
    }

    pub fn move_frames(&self) -> f64 {
        self.move_frames
    }

    pub fn fall_frames(&self) -> f64 {
        self.fall_frames
    }

    pub fn update_frames(&self) -> f64 {
        self.update_frames
    }

    /// Zero every accumulator, including banked time.
    pub fn reset(&mut self) {
        self.time_accumulator = 0.0;
        self.move_frames = 0.0;
        self.fall_frames = 0.0;
        self.update_frames = 0.0;
    }

    /// Bank elapsed wall-clock time. Negative or NaN deltas are ignored.
    pub fn bank(&mut self, delta_secs: f64) {
        if delta_secs > 0.0 {
            self.time_accumulator += delta_secs;
        }
    }

    /// Pay out one fixed step if enough time is banked.
    pub fn take_step(&mut self) -> bool {
        if self.time_accumulator + FIXED_STEP_EPSILON_SECS < FIXED_STEP_SECS {
            return false;
        }
        self.time_accumulator -= FIXED_STEP_SECS;
        true
    }

    /// Advance the frame counters by one step.
    ///
    /// Returns true when key-repeat is due; the move counter is reset in that
    /// case whether or not any key is held.
    pub fn begin_frame(&mut self) -> bool {
        self.move_frames += 1.0;
        self.fall_frames += 1.0;
        self.update_frames += 1.0;

        if self.move_frames >= self.move_threshold() {
            self.move_frames = 0.0;
            return true;
        }
        false
    }

    /// Check whether the engine should be stepped this frame.
    ///
    /// Returns `Some(should_fall)` when a step is due and `None` otherwise.
    pub fn gravity_due(&mut self) -> Option<bool> {
        let threshold = self.fall_threshold();
        if self.update_frames < threshold {
            return None;
        }

        let should_fall = self.fall_frames >= threshold;
        if should_fall {
            self.fall_frames = 0.0;
        }
        self.update_frames = 0.0;
        Some(should_fall)
    }

    /// Restart the key-repeat countdown (any manual move).
    pub fn reset_move(&mut self) {
        self.move_frames = 0.0;
    }

    /// Restart the gravity countdown (manual down-move).
    pub fn reset_fall(&mut self) {
        self.fall_frames = 0.0;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

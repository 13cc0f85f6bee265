//! Held-key tracker for terminal environments.
//!
//! The engine re-applies held movement keys on every key-repeat frame, so the
//! host needs a "currently held" set. Releases are queued and only applied at
//! the end of a frame: a key pressed and released between two ticks still
//! takes part in the tick that follows.
//!
//! Terminals without key-release events are handled with a timeout: a key that
//! has not been pressed again (terminal auto-repeat) within the timeout is
//! considered released.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::Key;

/// Upper bound on simultaneously held keys (one slot per logical key).
pub const MAX_HELD: usize = 10;

/// Default auto-release timeout in milliseconds.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Held keys and the time of their latest press.
    pressed: ArrayVec<(Key, Instant), MAX_HELD>,
    pending_release: ArrayVec<Key, MAX_HELD>,
    /// 0 disables auto-release.
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            pressed: ArrayVec::new(),
            pending_release: ArrayVec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a key press. Returns true on a new press edge, false when the
    /// key was already held (terminal auto-repeat).
    pub fn press(&mut self, key: Key) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: Key, now: Instant) -> bool {
        self.pending_release.retain(|k| *k != key);

        if let Some(entry) = self.pressed.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = now;
            return false;
        }
        let _ = self.pressed.try_push((key, now));
        true
    }

    /// Queue a release; it takes effect at [`HeldKeys::end_frame`].
    pub fn release(&mut self, key: Key) {
        if self.is_held(key) && !self.pending_release.contains(&key) {
            let _ = self.pending_release.try_push(key);
        }
    }

    /// Apply queued releases and expire keys that timed out.
    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    fn end_frame_at(&mut self, now: Instant) {
        let pending = std::mem::take(&mut self.pending_release);
        self.pressed.retain(|(k, _)| !pending.contains(k));

        if self.key_release_timeout_ms > 0 {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            self.pressed
                .retain(|(_, at)| now.saturating_duration_since(*at) <= timeout);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.pressed.iter().any(|(k, _)| *k == key)
    }

    /// Held keys in press order.
    pub fn held(&self) -> ArrayVec<Key, MAX_HELD> {
        self.pressed.iter().map(|(k, _)| *k).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Forget every held key, e.g. when the engine switches between menu and play.
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.pending_release.clear();
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

//! Intent Capture
//!
//! The six movement intents plus the fire intent, shared between the
//! input collaborator (window/event thread) and the simulation thread.
//! The shared side is a bank of atomics; the simulation reads one
//! [`IntentFrame`] snapshot per tick and never touches the atomics again
//! during that tick.
//!
//! The fire intent is consumed by the snapshot: a held trigger yields one
//! shot per press, not continuous fire.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared intent flags, written by the input collaborator.
#[derive(Debug, Default)]
pub struct IntentSet {
    forward: AtomicBool,
    back: AtomicBool,
    turn_left: AtomicBool,
    turn_right: AtomicBool,
    strafe_left: AtomicBool,
    strafe_right: AtomicBool,
    fire: AtomicBool,
}

impl IntentSet {
    /// Create with all intents clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the move-forward intent.
    pub fn set_forward(&self, on: bool) {
        self.forward.store(on, Ordering::Relaxed);
    }

    /// Set or clear the move-back intent.
    pub fn set_back(&self, on: bool) {
        self.back.store(on, Ordering::Relaxed);
    }

    /// Set or clear the turn-left intent.
    pub fn set_turn_left(&self, on: bool) {
        self.turn_left.store(on, Ordering::Relaxed);
    }

    /// Set or clear the turn-right intent.
    pub fn set_turn_right(&self, on: bool) {
        self.turn_right.store(on, Ordering::Relaxed);
    }

    /// Set or clear the strafe-left intent.
    pub fn set_strafe_left(&self, on: bool) {
        self.strafe_left.store(on, Ordering::Relaxed);
    }

    /// Set or clear the strafe-right intent.
    pub fn set_strafe_right(&self, on: bool) {
        self.strafe_right.store(on, Ordering::Relaxed);
    }

    /// Register a fire press. Latched until the next snapshot consumes it.
    pub fn press_fire(&self) {
        self.fire.store(true, Ordering::Relaxed);
    }

    /// Clear every intent (e.g. when the window loses focus).
    pub fn clear(&self) {
        self.set_forward(false);
        self.set_back(false);
        self.set_turn_left(false);
        self.set_turn_right(false);
        self.set_strafe_left(false);
        self.set_strafe_right(false);
        self.fire.store(false, Ordering::Relaxed);
    }

    /// Take a per-tick snapshot. Consumes the fire latch.
    pub fn snapshot(&self) -> IntentFrame {
        IntentFrame {
            forward: self.forward.load(Ordering::Relaxed),
            back: self.back.load(Ordering::Relaxed),
            turn_left: self.turn_left.load(Ordering::Relaxed),
            turn_right: self.turn_right.load(Ordering::Relaxed),
            strafe_left: self.strafe_left.load(Ordering::Relaxed),
            strafe_right: self.strafe_right.load(Ordering::Relaxed),
            fire: self.fire.swap(false, Ordering::Relaxed),
        }
    }
}

/// Intent state for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentFrame {
    /// Move along the facing vector
    pub forward: bool,
    /// Move against the facing vector
    pub back: bool,
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Sidestep along the plane vector
    pub strafe_left: bool,
    /// Sidestep against the plane vector
    pub strafe_right: bool,
    /// Fire the weapon this tick
    pub fire: bool,
}

impl IntentFrame {
    /// Create an idle frame.
    pub const fn idle() -> Self {
        Self {
            forward: false,
            back: false,
            turn_left: false,
            turn_right: false,
            strafe_left: false,
            strafe_right: false,
            fire: false,
        }
    }

    /// True if any translation or strafe intent is set.
    ///
    /// Turning alone is not movement: the weapon only bobs (and footsteps
    /// only play) while the player translates.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.forward || self.back || self.strafe_left || self.strafe_right
    }

    /// True if either turn intent is set.
    #[inline]
    pub fn turning(&self) -> bool {
        self.turn_left || self.turn_right
    }
}

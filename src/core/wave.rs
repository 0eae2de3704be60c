//! Sine Oscillator
//!
//! Phase-accumulator signal used for weapon view-bob and for timing
//! footstep cues. The phase only advances while the player is moving; when
//! all movement intents drop, the simulation resets it to zero so the next
//! walk cycle starts from the same point.

use serde::{Deserialize, Serialize};

/// A restartable sine oscillator.
///
/// `value() = amplitude * sin(phase * frequency)`, with `phase` advanced
/// by `speed * delta` per update. Resetting and replaying the same
/// `advance` sequence reproduces the identical value sequence.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SinWave {
    phase: f64,
    speed: f64,
    amplitude: f64,
    frequency: f64,
}

impl SinWave {
    /// Create an oscillator with phase zero.
    pub const fn new(speed: f64, amplitude: f64, frequency: f64) -> Self {
        Self {
            phase: 0.0,
            speed,
            amplitude,
            frequency,
        }
    }

    /// Advance the phase by `delta * speed`.
    #[inline]
    pub fn advance(&mut self, delta: f64) {
        self.phase += self.speed * delta;
    }

    /// Current signal value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.amplitude * (self.phase * self.frequency).sin()
    }

    /// Reset the phase to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Signal period in phase units.
    #[inline]
    pub fn period(&self) -> f64 {
        std::f64::consts::TAU / self.frequency
    }
}

//! Game Events
//!
//! Events generated during a tick. The deterministic simulation never
//! plays a sound itself; it records that a cue-worthy transition happened
//! and the driver routes the event to the audio dispatcher (and to anyone
//! recording the session).

use serde::{Deserialize, Serialize};

/// Event data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventData {
    /// The bob wave crossed the footstep threshold downward.
    Footstep,
    /// The fire intent was consumed this tick.
    WeaponFired {
        /// Which gun's sound/sprite family to use
        gun: u32,
    },
    /// Movement intents went from none to some.
    MovementStarted,
    /// Movement intents went from some to none.
    MovementStopped,
}

/// A game event with the tick it occurred on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when the event occurred
    pub tick: u64,
    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u64, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create a footstep event.
    pub fn footstep(tick: u64) -> Self {
        Self::new(tick, GameEventData::Footstep)
    }

    /// Create a weapon-fired event.
    pub fn weapon_fired(tick: u64, gun: u32) -> Self {
        Self::new(tick, GameEventData::WeaponFired { gun })
    }

    /// Create a movement-started event.
    pub fn movement_started(tick: u64) -> Self {
        Self::new(tick, GameEventData::MovementStarted)
    }

    /// Create a movement-stopped event.
    pub fn movement_stopped(tick: u64) -> Self {
        Self::new(tick, GameEventData::MovementStopped)
    }
}

//! Session State
//!
//! Everything one simulation session owns: the camera, the bob oscillator
//! with its edge detector, the weapon sprite state, the displayed health,
//! and the per-tick event buffer. The collision grid is built once from
//! level data and never mutated afterwards.

use crate::core::hash::{StateHash, StateHasher};
use crate::core::vec2::Vec2;
use crate::core::wave::SinWave;
use crate::game::camera::PlayerCamera;
use crate::game::events::GameEvent;
use crate::game::grid::CollisionGrid;
use crate::game::tick::SimConfig;
use crate::game::weapon::{WeaponSprite, WeaponSpriteState};
use serde::{Deserialize, Serialize};

/// Mutable state of one simulation session.
#[derive(Clone, Debug)]
pub struct SimState {
    /// Ticks advanced since session start
    pub tick: u64,
    /// Player pose
    pub camera: PlayerCamera,
    /// View-bob oscillator
    pub bob: SinWave,
    /// Weapon sprite selection
    pub weapon: WeaponSpriteState,
    /// Displayed health. Mutated by combat logic outside this core;
    /// read-only here and handed to the renderer each frame.
    pub health: i32,
    /// Collision grid for this session's level
    pub grid: CollisionGrid,
    /// Bob value at the previous tick, for threshold edge detection
    pub(crate) prev_bob: f64,
    /// Whether the previous tick had movement intents
    pub(crate) was_moving: bool,
    /// Events generated but not yet collected
    events: Vec<GameEvent>,
}

impl SimState {
    /// Create a session on a level.
    pub fn new(grid: CollisionGrid, config: &SimConfig) -> Self {
        Self {
            tick: 0,
            camera: PlayerCamera::new(config.spawn.x, config.spawn.y),
            bob: SinWave::new(
                config.bob_wave_speed,
                config.bob_amplitude,
                config.bob_frequency,
            ),
            weapon: WeaponSpriteState::new(),
            health: config.starting_health,
            grid,
            prev_bob: 0.0,
            was_moving: false,
            events: Vec::new(),
        }
    }

    /// Queue an event for collection at the end of the tick.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Overwrite the displayed health (combat collaborator hook).
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Snapshot handed to the render collaborator once per loop iteration.
    pub fn frame_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            position: self.camera.position,
            facing: self.camera.facing,
            plane: self.camera.plane,
            bob_offset: self.bob.value(),
            weapon_sprite: self.weapon.sprite(),
            health: self.health,
        }
    }

    /// Canonical digest of the observable state.
    ///
    /// Field order: tick, position, facing, plane, bob phase, weapon
    /// firing, health. Any divergence between two runs shows up here.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_sim_state();
        hasher.update_u64(self.tick);
        hasher.update_vec2(self.camera.position);
        hasher.update_vec2(self.camera.facing);
        hasher.update_vec2(self.camera.plane);
        hasher.update_f64(self.bob.phase());
        hasher.update_bool(self.weapon.is_firing());
        hasher.update_i32(self.health);
        hasher.finalize()
    }
}

/// Immutable view of one frame, consumed by the render collaborator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Tick the snapshot was taken at
    pub tick: u64,
    /// Player position
    pub position: Vec2,
    /// Facing direction
    pub facing: Vec2,
    /// Camera plane
    pub plane: Vec2,
    /// Vertical view-bob offset for the weapon sprite
    pub bob_offset: f64,
    /// Which weapon sprite to draw
    pub weapon_sprite: WeaponSprite,
    /// Health value to display
    pub health: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_at_spawn() {
        let config = SimConfig::default();
        let state = SimState::new(CollisionGrid::default_level(), &config);

        assert_eq!(state.tick, 0);
        assert_eq!(state.camera.position, config.spawn);
        assert_eq!(state.health, config.starting_health);
        assert_eq!(state.frame_snapshot().weapon_sprite, WeaponSprite::Idle);
    }

    #[test]
    fn test_take_events_drains() {
        let config = SimConfig::default();
        let mut state = SimState::new(CollisionGrid::default_level(), &config);

        state.push_event(GameEvent::footstep(1));
        state.push_event(GameEvent::weapon_fired(2, 1));

        assert_eq!(state.take_events().len(), 2);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_fresh_sessions_hash_equal() {
        let config = SimConfig::default();
        let a = SimState::new(CollisionGrid::default_level(), &config);
        let b = SimState::new(CollisionGrid::default_level(), &config);
        assert_eq!(a.compute_hash(), b.compute_hash());
    }

    #[test]
    fn test_health_affects_hash() {
        let config = SimConfig::default();
        let a = SimState::new(CollisionGrid::default_level(), &config);
        let mut b = SimState::new(CollisionGrid::default_level(), &config);
        b.set_health(50);
        assert_ne!(a.compute_hash(), b.compute_hash());
    }
}

//! Simulation Tick
//!
//! One fixed-size logic step: integrate movement, advance the bob wave,
//! detect footstep crossings, update the weapon sprite. Pure with respect
//! to clocks and I/O: identical state and intent frames produce identical
//! events and state hashes, which is what the replay tests assert.

use crate::core::vec2::Vec2;
use crate::game::events::GameEvent;
use crate::game::input::IntentFrame;
use crate::game::state::SimState;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick
    pub events: Vec<GameEvent>,
}

/// Tuning constants for a session.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Spawn position in cell units
    pub spawn: Vec2,
    /// Walk speed per tick, in cell units
    pub move_speed: f64,
    /// Turn speed per tick, in radians
    pub rotation_speed: f64,
    /// Strafing is `move_speed / strafe_divisor`
    pub strafe_divisor: f64,
    /// Bob wave phase speed
    pub bob_wave_speed: f64,
    /// Bob wave amplitude (pixels of weapon offset)
    pub bob_amplitude: f64,
    /// Bob wave frequency
    pub bob_frequency: f64,
    /// Phase delta fed to the bob wave each moving tick
    pub bob_step: f64,
    /// Bob value whose downward crossing fires a footstep
    pub footstep_threshold: f64,
    /// Ticks without fire intent before the idle sprite returns
    pub weapon_debounce_ticks: u32,
    /// Which gun family the player holds (locator index)
    pub gun_index: u32,
    /// Health shown until the combat collaborator says otherwise
    pub starting_health: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(4.5, 4.5),
            move_speed: 0.06,
            rotation_speed: 0.045,
            strafe_divisor: 1.7,
            bob_wave_speed: 0.5,
            bob_amplitude: 10.0,
            bob_frequency: 0.5,
            bob_step: 0.12,
            footstep_threshold: -9.0,
            weapon_debounce_ticks: 40,
            gun_index: 1,
            starting_health: 100,
        }
    }
}

/// Run one simulation tick.
///
/// # Arguments
///
/// * `state` - The session state (will be mutated)
/// * `frame` - Intent snapshot for this tick
/// * `config` - Session tuning
pub fn tick(state: &mut SimState, frame: &IntentFrame, config: &SimConfig) -> TickResult {
    // 0. Advance tick counter
    state.tick += 1;

    // 1. Movement transitions
    let moving = frame.has_movement();
    if moving && !state.was_moving {
        state.push_event(GameEvent::movement_started(state.tick));
    } else if !moving && state.was_moving {
        state.push_event(GameEvent::movement_stopped(state.tick));
    }
    state.was_moving = moving;

    // 2. Integrate movement against the grid
    state.camera.integrate(frame, &state.grid, config);

    // 3. Bob wave and footstep edge detection
    if moving {
        state.bob.advance(config.bob_step);
        let value = state.bob.value();
        // Downward crossing only: prev strictly above, current at or
        // below. Staying below the threshold does not re-fire.
        if state.prev_bob > config.footstep_threshold && value <= config.footstep_threshold {
            state.push_event(GameEvent::footstep(state.tick));
        }
        state.prev_bob = value;
    } else {
        state.bob.reset();
        state.prev_bob = state.bob.value();
    }

    // 4. Weapon sprite; the fire latch was already consumed by the
    //    snapshot, so this fires at most once per press
    if frame.fire {
        state.weapon.trigger_fire();
        state.push_event(GameEvent::weapon_fired(state.tick, config.gun_index));
    } else {
        state.weapon.advance(config.weapon_debounce_ticks);
    }

    TickResult {
        events: state.take_events(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wave::SinWave;
    use crate::game::events::GameEventData;
    use crate::game::grid::CollisionGrid;
    use crate::game::weapon::WeaponSprite;

    fn session() -> (SimState, SimConfig) {
        let config = SimConfig::default();
        let state = SimState::new(CollisionGrid::default_level(), &config);
        (state, config)
    }

    fn forward() -> IntentFrame {
        IntentFrame {
            forward: true,
            ..IntentFrame::idle()
        }
    }

    fn count_footsteps(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| e.data == GameEventData::Footstep)
            .count()
    }

    #[test]
    fn test_footstep_once_per_downward_crossing() {
        let (mut state, config) = session();
        // Forward and back together: movement stays active while the
        // camera stays put, clear of any wall.
        let frame = IntentFrame {
            forward: true,
            back: true,
            ..IntentFrame::idle()
        };

        let mut fired = Vec::new();
        for _ in 0..1000 {
            fired.extend(tick(&mut state, &frame, &config).events);
        }

        // Replay the wave independently and count the true crossings.
        let mut wave = SinWave::new(
            config.bob_wave_speed,
            config.bob_amplitude,
            config.bob_frequency,
        );
        let mut prev = 0.0f64;
        let mut crossings = 0usize;
        for _ in 0..1000 {
            wave.advance(config.bob_step);
            let value = wave.value();
            if prev > config.footstep_threshold && value <= config.footstep_threshold {
                crossings += 1;
            }
            prev = value;
        }

        assert!(crossings > 0, "test must cover at least one bob cycle");
        assert_eq!(count_footsteps(&fired), crossings);
    }

    #[test]
    fn test_no_footsteps_while_idle() {
        let (mut state, config) = session();
        let mut events = Vec::new();
        for _ in 0..1000 {
            events.extend(tick(&mut state, &IntentFrame::idle(), &config).events);
        }
        assert_eq!(count_footsteps(&events), 0);
    }

    #[test]
    fn test_stopping_resets_bob_cycle() {
        let (mut state, config) = session();
        let frame = IntentFrame {
            forward: true,
            back: true,
            ..IntentFrame::idle()
        };

        // Walk halfway into the cycle, then stop.
        for _ in 0..50 {
            tick(&mut state, &frame, &config);
        }
        tick(&mut state, &IntentFrame::idle(), &config);
        assert_eq!(state.bob.phase(), 0.0);

        // Restarting replays the cycle from its start: the first tick of
        // motion can never be a footstep.
        let result = tick(&mut state, &frame, &config);
        assert_eq!(count_footsteps(&result.events), 0);
    }

    #[test]
    fn test_fire_emits_event_and_sets_sprite() {
        let (mut state, config) = session();
        let frame = IntentFrame {
            fire: true,
            ..IntentFrame::idle()
        };

        let result = tick(&mut state, &frame, &config);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e.data, GameEventData::WeaponFired { gun: 1 })));
        assert_eq!(state.weapon.sprite(), WeaponSprite::Firing);

        // Debounce window: idle sprite only after 40 clear ticks.
        for _ in 0..config.weapon_debounce_ticks - 1 {
            tick(&mut state, &IntentFrame::idle(), &config);
            assert_eq!(state.weapon.sprite(), WeaponSprite::Firing);
        }
        tick(&mut state, &IntentFrame::idle(), &config);
        assert_eq!(state.weapon.sprite(), WeaponSprite::Idle);
    }

    #[test]
    fn test_movement_transition_events() {
        let (mut state, config) = session();

        let started = tick(&mut state, &forward(), &config);
        assert!(started
            .events
            .iter()
            .any(|e| e.data == GameEventData::MovementStarted));

        // No repeat while movement continues.
        let sustained = tick(&mut state, &forward(), &config);
        assert!(!sustained
            .events
            .iter()
            .any(|e| e.data == GameEventData::MovementStarted));

        let stopped = tick(&mut state, &IntentFrame::idle(), &config);
        assert!(stopped
            .events
            .iter()
            .any(|e| e.data == GameEventData::MovementStopped));
    }

    #[test]
    fn test_replay_determinism() {
        let config = SimConfig::default();
        let mut a = SimState::new(CollisionGrid::default_level(), &config);
        let mut b = SimState::new(CollisionGrid::default_level(), &config);

        let script: Vec<IntentFrame> = (0..500)
            .map(|i| IntentFrame {
                forward: i % 3 != 0,
                turn_right: i % 7 == 0,
                strafe_left: i % 11 == 0,
                fire: i % 60 == 0,
                ..IntentFrame::idle()
            })
            .collect();

        let mut events_a = Vec::new();
        let mut events_b = Vec::new();
        for frame in &script {
            events_a.extend(tick(&mut a, frame, &config).events);
            events_b.extend(tick(&mut b, frame, &config).events);
        }

        assert_eq!(a.compute_hash(), b.compute_hash());
        assert_eq!(events_a, events_b);
    }

    #[test]
    fn test_blocked_forward_leaves_x_unchanged() {
        let config = SimConfig::default();
        let grid = CollisionGrid::from_rows(&[vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
        let mut state = SimState::new(grid, &config);
        state.camera = crate::game::camera::PlayerCamera::new(1.5, 1.5);

        for _ in 0..300 {
            tick(&mut state, &forward(), &config);
        }
        assert!(state.camera.position.x < 2.0);
        assert!((state.camera.position.y - 1.5).abs() < 1e-12);
    }
}

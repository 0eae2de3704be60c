//! Simulation Logic
//!
//! All deterministic per-tick code. Nothing in here touches a wall clock,
//! a thread, or a file; the driver feeds it intent snapshots and routes
//! the events it emits to the audio dispatcher.
//!
//! ## Module Structure
//!
//! - `input`: shared movement/fire intents and the per-tick snapshot
//! - `grid`: collision grid built once from level data
//! - `camera`: player pose and per-axis collision movement
//! - `weapon`: weapon sprite selection with debounce
//! - `assets`: asset locator conventions
//! - `state`: session state, frame snapshots, state hash
//! - `tick`: one logic step
//! - `events`: cue and transition events produced per tick

pub mod assets;
pub mod camera;
pub mod events;
pub mod grid;
pub mod input;
pub mod state;
pub mod tick;
pub mod weapon;

// Re-export key types
pub use camera::PlayerCamera;
pub use events::{GameEvent, GameEventData};
pub use grid::CollisionGrid;
pub use input::{IntentFrame, IntentSet};
pub use state::{FrameSnapshot, SimState};
pub use tick::{tick, SimConfig, TickResult};
pub use weapon::{WeaponSprite, WeaponSpriteState};

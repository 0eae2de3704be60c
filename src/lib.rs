//! # Lucid Sim
//!
//! Fixed-timestep simulation core for a first-person grid-world game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        LUCID SIM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - 2D vector with rotation                   │
//! │  ├── wave.rs     - Sine oscillator (view-bob, footsteps)     │
//! │  └── hash.rs     - State hashing for determinism checks      │
//! │                                                              │
//! │  game/           - Simulation logic (deterministic)          │
//! │  ├── input.rs    - Movement/fire intents, per-tick snapshot  │
//! │  ├── grid.rs     - Collision grid from level data            │
//! │  ├── camera.rs   - Player pose, per-axis collision movement  │
//! │  ├── weapon.rs   - Weapon sprite state machine               │
//! │  ├── assets.rs   - Asset locator conventions                 │
//! │  ├── state.rs    - Session state and frame snapshots         │
//! │  ├── tick.rs     - One logic step                            │
//! │  └── events.rs   - Cue/transition events per tick            │
//! │                                                              │
//! │  audio/          - Cue playback (non-deterministic)          │
//! │  ├── backend.rs  - AudioBackend seam, rodio + null impls     │
//! │  └── dispatcher.rs - Per-category cue tasks and flags        │
//! │                                                              │
//! │  driver/         - The loop                                  │
//! │  ├── clock.rs    - Fixed-timestep accumulator                │
//! │  └── run.rs      - Simulation thread + render sink           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timing model
//!
//! The `core/` and `game/` modules contain no clocks and no I/O: one call
//! to [`game::tick::tick`] advances the session by exactly 1/60 s of
//! simulated time, and identical intent sequences produce identical state
//! hashes. The driver owns the wall clock, draining due ticks through a
//! fractional accumulator and invoking the render collaborator once per
//! loop iteration, uncapped. Audio cues requested by a tick are handed to
//! the dispatcher, which plays them on its own small worker pool; the
//! simulation thread never blocks on playback.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod audio;
pub mod core;
pub mod driver;
pub mod game;

// Re-export commonly used types
pub use crate::core::hash::{StateHash, StateHasher};
pub use crate::core::vec2::Vec2;
pub use crate::core::wave::SinWave;
pub use audio::backend::{AudioBackend, AudioError, NullBackend, RodioBackend};
pub use audio::dispatcher::{AudioConfig, CueCategory, CueDispatcher, CueFlags};
pub use driver::run::{LoopHandle, RenderSink, SimulationLoop};
pub use game::grid::CollisionGrid;
pub use game::input::{IntentFrame, IntentSet};
pub use game::state::{FrameSnapshot, SimState};
pub use game::tick::SimConfig;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;

/// Duration of one logic tick in seconds
pub const TICK_INTERVAL: f64 = 1.0 / TICK_RATE as f64;

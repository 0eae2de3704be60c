//! Simulation Driver
//!
//! The piece that owns the wall clock. A dedicated thread drains due
//! logic ticks through the fixed-timestep accumulator, routes tick events
//! to the cue dispatcher, and invokes the render collaborator once per
//! loop iteration.
//!
//! ## Module Structure
//!
//! - `clock`: pure fixed-timestep accumulator
//! - `run`: the loop thread, render sink seam, stop handle

pub mod clock;
pub mod run;

// Re-export key types
pub use clock::TickClock;
pub use run::{LoopHandle, RenderSink, SimulationLoop};

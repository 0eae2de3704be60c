//! Audio Cue Playback
//!
//! The non-deterministic half of the crate. The simulation emits cue
//! events; the dispatcher turns them into playback tasks on its own small
//! worker pool, gated by one in-flight flag per cue category. The actual
//! device sits behind the [`backend::AudioBackend`] seam so tests and
//! headless hosts run without audio hardware.
//!
//! ## Module Structure
//!
//! - `backend`: `AudioBackend`/`CueSink` traits, rodio and null impls
//! - `dispatcher`: cue categories, in-flight flags, playback tasks

pub mod backend;
pub mod dispatcher;

// Re-export key types
pub use backend::{AudioBackend, AudioError, CueSink, NullBackend, PlayMode, RodioBackend};
pub use dispatcher::{
    AudioConfig, CueCategory, CueCompletion, CueDispatcher, CueFlags, CueOutcome,
};

//! Audio Backend Seam
//!
//! The dispatcher never talks to a device directly; it opens sinks
//! through [`AudioBackend`] and waits on them through [`CueSink`]. A sink
//! returned by `open` is already playing, so "playback started" is the
//! `Ok` itself; "playback finished" is `wait_until_end` returning.
//!
//! Two implementations ship: [`RodioBackend`] over a rodio output stream,
//! and [`NullBackend`] for tests and hosts without an audio device.

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Condvar, Mutex, PoisonError};

/// Audio subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// Asset file could not be opened.
    #[error("failed to open audio asset: {0}")]
    Open(#[from] std::io::Error),

    /// Asset file could not be decoded.
    #[error("failed to decode audio asset: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    /// Output device rejected the sink.
    #[error("audio device error: {0}")]
    Device(#[from] rodio::PlayError),

    /// No output device is available.
    #[error("no audio output device: {0}")]
    NoDevice(#[from] rodio::StreamError),

    /// Cue worker pool could not be built.
    #[error("cue worker pool failed to start: {0}")]
    Worker(std::io::Error),
}

/// How a cue should play out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayMode {
    /// Play the asset once and finish.
    Once,
    /// Repeat the asset until stopped (background music).
    Loop,
}

/// A live playback, already running when handed out.
pub trait CueSink: Send + Sync {
    /// Block until playback has drained or was stopped.
    fn wait_until_end(&self);

    /// Stop playback; unblocks any `wait_until_end` caller.
    fn stop(&self);
}

/// Opens playing sinks for asset locators.
pub trait AudioBackend: Send + Sync {
    /// Open `locator` and start playing it at `volume`.
    fn open(
        &self,
        locator: &Path,
        mode: PlayMode,
        volume: f32,
    ) -> Result<Arc<dyn CueSink>, AudioError>;
}

// =============================================================================
// RODIO
// =============================================================================

/// Backend over a rodio output stream.
pub struct RodioBackend {
    handle: OutputStreamHandle,
}

impl RodioBackend {
    /// Wrap an existing output stream handle.
    pub fn new(handle: OutputStreamHandle) -> Self {
        Self { handle }
    }

    /// Open the default output device.
    ///
    /// The returned [`OutputStream`] must be kept alive for as long as any
    /// sink plays; dropping it silences everything.
    pub fn try_default() -> Result<(Self, OutputStream), AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok((Self::new(handle), stream))
    }
}

impl AudioBackend for RodioBackend {
    fn open(
        &self,
        locator: &Path,
        mode: PlayMode,
        volume: f32,
    ) -> Result<Arc<dyn CueSink>, AudioError> {
        let file = File::open(locator)?;
        let source = Decoder::new(BufReader::new(file))?;

        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(volume);
        match mode {
            PlayMode::Once => sink.append(source),
            PlayMode::Loop => sink.append(source.repeat_infinite()),
        }

        Ok(Arc::new(RodioCueSink { sink }))
    }
}

struct RodioCueSink {
    sink: Sink,
}

impl CueSink for RodioCueSink {
    fn wait_until_end(&self) {
        self.sink.sleep_until_end();
    }

    fn stop(&self) {
        self.sink.stop();
    }
}

// =============================================================================
// NULL
// =============================================================================

/// Silent backend for tests and hosts without an output device.
///
/// One-shot cues complete immediately; looping cues idle until stopped,
/// matching the lifetime shape of real playback.
#[derive(Debug, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn open(
        &self,
        _locator: &Path,
        mode: PlayMode,
        _volume: f32,
    ) -> Result<Arc<dyn CueSink>, AudioError> {
        Ok(Arc::new(NullCueSink {
            done: Mutex::new(mode == PlayMode::Once),
            signal: Condvar::new(),
        }))
    }
}

struct NullCueSink {
    done: Mutex<bool>,
    signal: Condvar,
}

impl CueSink for NullCueSink {
    fn wait_until_end(&self) {
        let mut done = self.done.lock().unwrap_or_else(PoisonError::into_inner);
        while !*done {
            done = self
                .signal
                .wait(done)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn stop(&self) {
        let mut done = self.done.lock().unwrap_or_else(PoisonError::into_inner);
        *done = true;
        self.signal.notify_all();
    }
}

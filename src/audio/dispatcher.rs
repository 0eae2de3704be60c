//! Cue Dispatcher
//!
//! Turns cue requests from the simulation into playback tasks on a small
//! dedicated worker pool. One atomic in-flight flag per category enforces
//! at-most-one concurrent playback of each kind; the simulation thread
//! only ever flips a flag and returns, it never blocks on audio.
//!
//! Completion is a channel, not a poll loop: each task parks a blocking
//! end-of-playback wait on the pool and races it against the session
//! cancellation signal and (for one-shot cues) a configured timeout.

use crate::audio::backend::{AudioBackend, PlayMode};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// Cue categories, each with an independent in-flight flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueCategory {
    /// Footstep tied to the bob-wave crossing
    Footstep,
    /// Weapon discharge
    WeaponFire,
    /// Background music loop
    Music,
}

/// Per-category in-flight flags, shared with the simulation side.
///
/// A set flag means a playback task for that category is live. Acquire is
/// a single compare-exchange, so two triggers can never both win.
#[derive(Debug, Default)]
pub struct CueFlags {
    footstep: AtomicBool,
    weapon_fire: AtomicBool,
    music: AtomicBool,
}

impl CueFlags {
    fn slot(&self, category: CueCategory) -> &AtomicBool {
        match category {
            CueCategory::Footstep => &self.footstep,
            CueCategory::WeaponFire => &self.weapon_fire,
            CueCategory::Music => &self.music,
        }
    }

    /// Whether a cue of this category is currently playing.
    pub fn is_in_flight(&self, category: CueCategory) -> bool {
        self.slot(category).load(Ordering::Acquire)
    }

    fn try_acquire(&self, category: CueCategory) -> bool {
        self.slot(category)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn release(&self, category: CueCategory) {
        self.slot(category).store(false, Ordering::Release);
    }
}

/// How a playback task ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueOutcome {
    /// Playback drained normally.
    Completed,
    /// Asset could not be opened or decoded; cue skipped.
    Failed,
    /// Session stop interrupted the playback.
    Cancelled,
    /// One-shot cue exceeded the configured bound.
    TimedOut,
}

/// Completion report sent back to the simulation loop.
#[derive(Clone, Copy, Debug)]
pub struct CueCompletion {
    /// Category of the finished cue
    pub category: CueCategory,
    /// How it ended
    pub outcome: CueOutcome,
}

/// Dispatcher configuration.
#[derive(Clone, Debug)]
pub struct AudioConfig {
    /// Gain applied to every cue
    pub master_volume: f32,
    /// Gain for the music category
    pub music_volume: f32,
    /// Gain for footstep/weapon cues
    pub effect_volume: f32,
    /// Which background track to start the session with
    pub music_track: u32,
    /// Upper bound on one-shot cue playback
    pub cue_timeout: Duration,
    /// Grace period for in-flight tasks on shutdown
    pub shutdown_grace: Duration,
    /// Worker threads in the playback pool
    pub worker_threads: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            music_volume: 0.7,
            effect_volume: 1.0,
            music_track: 0,
            cue_timeout: Duration::from_secs(30),
            shutdown_grace: Duration::from_secs(2),
            worker_threads: 2,
        }
    }
}

/// Spawns and tracks transient playback tasks.
pub struct CueDispatcher {
    runtime: tokio::runtime::Runtime,
    backend: Arc<dyn AudioBackend>,
    flags: Arc<CueFlags>,
    completion_tx: mpsc::UnboundedSender<CueCompletion>,
    cancel_tx: watch::Sender<bool>,
    tasks: std::sync::Mutex<Vec<tokio::task::JoinHandle<()>>>,
    config: AudioConfig,
}

impl CueDispatcher {
    /// Build a dispatcher over `backend` with its own worker pool.
    ///
    /// Returns the dispatcher and the receiver for completion reports,
    /// which the simulation loop drains for logging.
    pub fn new(
        backend: Arc<dyn AudioBackend>,
        config: AudioConfig,
    ) -> Result<(Self, mpsc::UnboundedReceiver<CueCompletion>), crate::audio::backend::AudioError>
    {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(config.worker_threads)
            .thread_name("cue-worker")
            .enable_time()
            .build()
            .map_err(crate::audio::backend::AudioError::Worker)?;

        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let (cancel_tx, _) = watch::channel(false);

        Ok((
            Self {
                runtime,
                backend,
                flags: Arc::new(CueFlags::default()),
                completion_tx,
                cancel_tx,
                tasks: std::sync::Mutex::new(Vec::new()),
                config,
            },
            completion_rx,
        ))
    }

    /// Shared view of the in-flight flags.
    pub fn flags(&self) -> Arc<CueFlags> {
        self.flags.clone()
    }

    /// The configured start-of-session music track index.
    pub fn music_track(&self) -> u32 {
        self.config.music_track
    }

    /// Request playback of a cue.
    ///
    /// Ignored (with a debug log) while a cue of the same category is
    /// in-flight. A missing or undecodable asset is logged and skipped;
    /// it never reaches the simulation loop as an error.
    pub fn trigger(&self, category: CueCategory, locator: &Path) {
        if !self.flags.try_acquire(category) {
            debug!(?category, "cue dropped: category already in flight");
            return;
        }

        let mode = match category {
            CueCategory::Music => PlayMode::Loop,
            _ => PlayMode::Once,
        };
        let volume = self.config.master_volume
            * match category {
                CueCategory::Music => self.config.music_volume,
                _ => self.config.effect_volume,
            };
        let timeout = match category {
            CueCategory::Music => None,
            _ => Some(self.config.cue_timeout),
        };

        let task = PlaybackTask {
            backend: self.backend.clone(),
            flags: self.flags.clone(),
            completion_tx: self.completion_tx.clone(),
            cancel_rx: self.cancel_tx.subscribe(),
            category,
            locator: locator.to_path_buf(),
            mode,
            volume,
            timeout,
        };
        let handle = self.runtime.spawn(task.run());

        let mut tasks = self
            .tasks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle);
    }

    /// Cancel in-flight cues and tear the worker pool down.
    ///
    /// Every playback task observes the cancellation signal, releases its
    /// flag and reports before the pool stops; anything that outlives the
    /// grace period is abandoned with a warning.
    pub fn shutdown(self) {
        let _ = self.cancel_tx.send(true);

        let tasks = std::mem::take(
            &mut *self
                .tasks
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        );
        let grace = self.config.shutdown_grace;
        self.runtime.block_on(async {
            for task in tasks {
                if tokio::time::timeout(grace, task).await.is_err() {
                    warn!("cue task did not stop within the grace period");
                }
            }
        });
        self.runtime.shutdown_timeout(Duration::from_millis(100));

        let leaked: Vec<CueCategory> = [
            CueCategory::Footstep,
            CueCategory::WeaponFire,
            CueCategory::Music,
        ]
        .into_iter()
        .filter(|c| self.flags.is_in_flight(*c))
        .collect();
        if leaked.is_empty() {
            info!("cue dispatcher shut down cleanly");
        } else {
            warn!(?leaked, "cue tasks still in flight after grace period");
        }
    }
}

/// State for one playback task.
struct PlaybackTask {
    backend: Arc<dyn AudioBackend>,
    flags: Arc<CueFlags>,
    completion_tx: mpsc::UnboundedSender<CueCompletion>,
    cancel_rx: watch::Receiver<bool>,
    category: CueCategory,
    locator: PathBuf,
    mode: PlayMode,
    volume: f32,
    timeout: Option<Duration>,
}

impl PlaybackTask {
    async fn run(mut self) {
        let outcome = self.play().await;
        self.flags.release(self.category);
        let _ = self.completion_tx.send(CueCompletion {
            category: self.category,
            outcome,
        });
        debug!(category = ?self.category, ?outcome, "cue finished");
    }

    async fn play(&mut self) -> CueOutcome {
        if *self.cancel_rx.borrow() {
            return CueOutcome::Cancelled;
        }

        let sink = match self.backend.open(&self.locator, self.mode, self.volume) {
            Ok(sink) => sink,
            Err(e) => {
                warn!(
                    category = ?self.category,
                    locator = %self.locator.display(),
                    error = %e,
                    "cue skipped: asset unavailable",
                );
                return CueOutcome::Failed;
            }
        };

        // The sink is live now; park the blocking end-of-playback wait on
        // the pool and race it against cancellation and the bound.
        let (done_tx, done_rx) = oneshot::channel();
        let waiter = sink.clone();
        tokio::task::spawn_blocking(move || {
            waiter.wait_until_end();
            let _ = done_tx.send(());
        });

        match self.timeout {
            Some(bound) => tokio::select! {
                _ = done_rx => CueOutcome::Completed,
                _ = self.cancel_rx.changed() => {
                    sink.stop();
                    CueOutcome::Cancelled
                }
                _ = tokio::time::sleep(bound) => {
                    warn!(category = ?self.category, ?bound, "cue exceeded bound, stopping");
                    sink.stop();
                    CueOutcome::TimedOut
                }
            },
            None => tokio::select! {
                _ = done_rx => CueOutcome::Completed,
                _ = self.cancel_rx.changed() => {
                    sink.stop();
                    CueOutcome::Cancelled
                }
            },
        }
    }
}

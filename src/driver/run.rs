//! Simulation Loop
//!
//! One dedicated thread owns the session: it drains due logic ticks,
//! routes cue events to the dispatcher, and calls the render collaborator
//! once per iteration, uncapped. Stopping is graceful: the in-progress
//! iteration finishes, the thread joins, and the dispatcher cancels any
//! in-flight cues.

use crate::audio::dispatcher::{CueCategory, CueCompletion, CueDispatcher};
use crate::driver::clock::TickClock;
use crate::game::assets;
use crate::game::events::GameEventData;
use crate::game::input::IntentSet;
use crate::game::state::{FrameSnapshot, SimState};
use crate::game::tick::{tick, SimConfig};
use crate::TICK_RATE;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Render collaborator contract.
///
/// Called once per loop iteration with the freshest frame; must return
/// quickly (any presentation throttling is the collaborator's own
/// business, independent of the tick rate).
pub trait RenderSink: Send {
    /// Present one frame.
    fn render_frame(&mut self, frame: &FrameSnapshot);
}

/// The fixed-timestep session driver.
pub struct SimulationLoop;

impl SimulationLoop {
    /// Start the session on its own thread.
    ///
    /// Triggers the background music once at session start, then runs
    /// until [`LoopHandle::stop`] is called.
    pub fn spawn(
        mut state: SimState,
        config: SimConfig,
        intents: Arc<IntentSet>,
        dispatcher: CueDispatcher,
        mut completions: mpsc::UnboundedReceiver<CueCompletion>,
        mut sink: Box<dyn RenderSink>,
    ) -> std::io::Result<LoopHandle> {
        let running = Arc::new(AtomicBool::new(true));
        let thread_running = running.clone();

        let thread = std::thread::Builder::new()
            .name("sim-loop".into())
            .spawn(move || {
                info!(tick_rate = TICK_RATE, "simulation loop starting");
                dispatcher.trigger(
                    CueCategory::Music,
                    &assets::music_track(dispatcher.music_track()),
                );

                let mut clock = TickClock::new(TICK_RATE);
                let mut last = Instant::now();

                while thread_running.load(Ordering::Acquire) {
                    let now = Instant::now();
                    let due = clock.advance(now - last);
                    last = now;

                    for _ in 0..due {
                        let frame = intents.snapshot();
                        let result = tick(&mut state, &frame, &config);
                        for event in result.events {
                            route_event(&dispatcher, &event.data);
                        }
                        while let Ok(completion) = completions.try_recv() {
                            debug!(
                                category = ?completion.category,
                                outcome = ?completion.outcome,
                                "cue completion",
                            );
                        }
                    }

                    sink.render_frame(&state.frame_snapshot());
                }

                info!(tick = state.tick, "simulation loop stopped");
                (state, dispatcher)
            })?;

        Ok(LoopHandle {
            running,
            thread: Some(thread),
        })
    }
}

/// Map a tick event to its cue, if it has one.
fn route_event(dispatcher: &CueDispatcher, data: &GameEventData) {
    match data {
        GameEventData::Footstep => {
            dispatcher.trigger(CueCategory::Footstep, &assets::step_sound());
        }
        GameEventData::WeaponFired { gun } => {
            dispatcher.trigger(CueCategory::WeaponFire, &assets::gun_sound(*gun));
        }
        GameEventData::MovementStarted | GameEventData::MovementStopped => {
            debug!(?data, "movement transition");
        }
    }
}

/// Owner handle for a running simulation loop.
///
/// Dropping the handle without calling [`stop`](Self::stop) detaches the
/// loop; it keeps running until the process exits.
pub struct LoopHandle {
    running: Arc<AtomicBool>,
    thread: Option<std::thread::JoinHandle<(SimState, CueDispatcher)>>,
}

impl LoopHandle {
    /// Request a stop and wait for the loop to finish its current
    /// iteration, then shut the cue dispatcher down.
    ///
    /// Returns the final session state.
    pub fn stop(mut self) -> SimState {
        self.running.store(false, Ordering::Release);
        let thread = match self.thread.take() {
            Some(thread) => thread,
            None => unreachable!("stop consumes the handle"),
        };
        match thread.join() {
            Ok((state, dispatcher)) => {
                dispatcher.shutdown();
                state
            }
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

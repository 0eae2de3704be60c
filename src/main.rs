//! Lucid Sim demo binary
//!
//! Runs a headless scripted session against the real loop: a bot holds
//! the forward intent, squeezes off a shot every second, and the session
//! summary (event tally, state hash) is logged at the end.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lucid_sim::{
    AudioBackend, AudioConfig, CollisionGrid, CueDispatcher, FrameSnapshot, IntentSet,
    NullBackend, RenderSink, RodioBackend, SimConfig, SimState, SimulationLoop, TICK_RATE,
    VERSION,
};

/// Render sink that just counts frames and logs a heartbeat.
#[derive(Default)]
struct HeadlessSink {
    frames: u64,
}

impl RenderSink for HeadlessSink {
    fn render_frame(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            info!(
                tick = frame.tick,
                position = %frame.position,
                sprite = ?frame.weapon_sprite,
                health = frame.health,
                "frame {}",
                self.frames,
            );
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Lucid Sim v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    demo_session()
}

/// Run a short scripted session and report on it.
fn demo_session() -> Result<()> {
    let config = SimConfig::default();
    let audio_config = AudioConfig::default();

    // Prefer the real output device; a headless host still runs.
    let mut _stream = None;
    let backend: Arc<dyn AudioBackend> = match RodioBackend::try_default() {
        Ok((backend, stream)) => {
            _stream = Some(stream);
            Arc::new(backend)
        }
        Err(e) => {
            warn!(error = %e, "no audio device, running silent");
            Arc::new(NullBackend)
        }
    };

    let (dispatcher, completions) = CueDispatcher::new(backend, audio_config)?;
    let intents = Arc::new(IntentSet::new());
    let state = SimState::new(CollisionGrid::default_level(), &config);

    info!("=== Starting Demo Session ===");
    let handle = SimulationLoop::spawn(
        state,
        config,
        intents.clone(),
        dispatcher,
        completions,
        Box::new(HeadlessSink::default()),
    )?;

    // The bot: hold forward, fire once a second.
    intents.set_forward(true);
    for _ in 0..3 {
        std::thread::sleep(Duration::from_secs(1));
        intents.press_fire();
    }
    intents.clear();
    std::thread::sleep(Duration::from_millis(250));

    let state = handle.stop();

    info!("=== Session Results ===");
    info!("Ticks simulated: {}", state.tick);
    info!("Final position: {}", state.camera.position);
    info!("State hash: {}", hex::encode(state.compute_hash()));

    let summary = serde_json::to_string_pretty(&state.frame_snapshot())?;
    println!("{summary}");

    Ok(())
}

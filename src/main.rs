//! Layered Wheels entry point
//!
//! Headless native driver: builds a session from a config file (or the
//! default stack), runs it on a fixed timestep and clicks every few seconds.

use layered_wheels::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use layered_wheels::sim::{LayeredWheelEngine, Session, SessionInput, SessionPhase};
use layered_wheels::{EngineConfig, WheelError};

/// Simulated seconds between clicks
const CLICK_INTERVAL: f32 = 2.5;
/// Rounds to play before exiting
const ROUNDS: u32 = 4;
/// Simulated frame time (a 60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Fixed-timestep driver around a session
struct Driver {
    session: Session,
    accumulator: f32,
    since_click: f32,
    input: SessionInput,
}

impl Driver {
    fn new(session: Session) -> Self {
        Self {
            session,
            accumulator: 0.0,
            since_click: 0.0,
            input: SessionInput::default(),
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        self.accumulator += dt;
        self.since_click += dt;

        if self.since_click >= CLICK_INTERVAL {
            self.since_click = 0.0;
            self.input.click = true;
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.session.tick(&self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.click = false;
        }
    }
}

fn run() -> Result<(), WheelError> {
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => {
            log::info!("No config given, using the default stack");
            EngineConfig::default()
        }
    };

    let engine = LayeredWheelEngine::from_config(&config);
    log::info!(
        "Session starting: {} wheels, seed {}, {} scoring",
        engine.len(),
        config.seed,
        config.score_mode.as_str()
    );

    let mut driver = Driver::new(Session::new(engine, config.score_mode));
    let mut last_phase = driver.session.phase();

    loop {
        driver.update(FRAME_DT);

        let phase = driver.session.phase();
        if phase != last_phase {
            if let Some(text) = driver.session.score_text() {
                println!("{text}");
                for layer in driver.session.engine().layers() {
                    log::debug!(
                        "wheel {} at {:.1}°",
                        layer.depth(),
                        layer.normalized_angle()
                    );
                }
            }
            last_phase = phase;
        }
        if driver.session.rounds() >= ROUNDS && phase == SessionPhase::ScoreView {
            break;
        }
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Layered Wheels (native) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The headless driver is native only
}

//! Click-driven play session
//!
//! Spinning --click--> ScoreView (wheels stopped, score shown)
//! ScoreView --click--> Spinning (score hidden, wheels resume)

use serde::{Deserialize, Serialize};

use super::engine::LayeredWheelEngine;
use super::scoring::{Score, ScoreMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Wheels turning, top-mark indicator visible
    Spinning,
    /// Wheels frozen, score on screen
    ScoreView,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    /// Primary click / tap this tick
    pub click: bool,
}

#[derive(Debug)]
pub struct Session {
    engine: LayeredWheelEngine,
    phase: SessionPhase,
    mode: ScoreMode,
    last_score: Option<Score>,
    /// Completed rounds
    rounds: u32,
}

impl Session {
    pub fn new(mut engine: LayeredWheelEngine, mode: ScoreMode) -> Self {
        engine.spin();
        Self {
            engine,
            phase: SessionPhase::Spinning,
            mode,
            last_score: None,
            rounds: 0,
        }
    }

    /// Handle input, then advance the wheels by `dt`
    pub fn tick(&mut self, input: &SessionInput, dt: f32) {
        if input.click {
            match self.phase {
                SessionPhase::Spinning => {
                    self.engine.stop();
                    let score = self.engine.score(self.mode);
                    log::info!("Round {} stopped: {score}", self.rounds + 1);
                    self.last_score = Some(score);
                    self.rounds += 1;
                    self.phase = SessionPhase::ScoreView;
                }
                SessionPhase::ScoreView => {
                    self.last_score = None;
                    self.engine.spin();
                    log::info!("Restarting wheels");
                    self.phase = SessionPhase::Spinning;
                }
            }
        }

        self.engine.advance(dt);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> ScoreMode {
        self.mode
    }

    pub fn engine(&self) -> &LayeredWheelEngine {
        &self.engine
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Score line to show, only while the score is on screen
    pub fn score_text(&self) -> Option<String> {
        match self.phase {
            SessionPhase::ScoreView => self.last_score.map(|s| s.to_string()),
            SessionPhase::Spinning => None,
        }
    }

    /// Whether the top-mark arrow should be shown
    pub fn indicator_visible(&self) -> bool {
        self.phase == SessionPhase::Spinning
    }
}

//! Browser binding
//!
//! The page owns the canvas, the DOM HUD and the audio. It forwards input and
//! `requestAnimationFrame` timestamps here and reads back events and snapshots
//! as JSON.

use wasm_bindgen::prelude::*;

use super::FrameClock;
use crate::highscores::HighScores;
use crate::input::{InputSource, ThrustSampler};
use crate::sim::{GameEvent, GamePhase, Simulation};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tunnel Runner starting...");
}

/// Game instance handed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation,
    input: ThrustSampler,
    clock: FrameClock,
    high_scores: HighScores,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> WebGame {
        Self::from_sim(Simulation::with_tuning(seed, Tuning::load()))
    }

    /// Start with a JSON tuning override and keep it for later sessions
    pub fn with_tuning(seed: u64, json: &str) -> Result<WebGame, JsError> {
        let sim = Simulation::from_tuning_json(seed, json)?;
        sim.tuning().save();
        Ok(Self::from_sim(sim))
    }

    /// Advance one animation frame. Returns the events as a JSON array.
    pub fn frame(&mut self, now_ms: f64) -> String {
        let dt = self.clock.frame(now_ms);
        let thrust = self.input.thrust();
        let events = self.sim.tick(thrust, dt);

        if events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            self.record_run();
        }

        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn key(&mut self, down: bool) {
        self.input.set(InputSource::Key, down);
    }

    pub fn pointer(&mut self, down: bool) {
        self.input.set(InputSource::Pointer, down);
    }

    pub fn touch(&mut self, down: bool) {
        self.input.set(InputSource::Touch, down);
    }

    /// Window lost focus: drop held inputs and skip the hidden time
    pub fn blur(&mut self) {
        self.input.release_all();
        self.clock.reset();
    }

    pub fn restart(&mut self) {
        self.sim.set_high_score(self.high_scores.best());
        self.sim.restart();
        self.clock.reset();
    }

    /// Full world state as JSON for the renderer
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self.sim.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn score(&self) -> u64 {
        self.sim.snapshot().score
    }

    pub fn life(&self) -> u32 {
        self.sim.snapshot().life
    }

    pub fn best(&self) -> u64 {
        self.high_scores.best()
    }

    /// 0 = title, 1 = running, 2 = game over
    pub fn phase(&self) -> u8 {
        match self.sim.snapshot().phase {
            GamePhase::Title => 0,
            GamePhase::Running => 1,
            GamePhase::GameOver => 2,
        }
    }

    pub fn difficulty(&self) -> f32 {
        self.sim.difficulty_multiplier()
    }
}

impl WebGame {
    fn from_sim(mut sim: Simulation) -> WebGame {
        let high_scores = HighScores::load();
        sim.set_high_score(high_scores.best());
        log::info!("Game initialized with seed: {}", sim.seed());
        WebGame {
            sim,
            input: ThrustSampler::new(),
            clock: FrameClock::new(),
            high_scores,
        }
    }

    fn record_run(&mut self) {
        let state = self.sim.snapshot();
        let now = js_sys::Date::now();
        if let Some(rank) = self
            .high_scores
            .add_score(state.score, state.camera_distance, now)
        {
            log::info!("Run ranked #{} on the leaderboard", rank);
            self.high_scores.save();
        }
    }
}

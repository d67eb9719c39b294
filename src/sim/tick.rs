//! Per-frame simulation tick
//!
//! `Simulation` owns the world state, the tuning and the seeded RNG, and runs
//! the phase machine: Title -> Running -> GameOver -> (restart) -> Title.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacles::advance_obstacles;
use super::player::advance_player;
use super::progress::{advance_progress, difficulty_multiplier};
use super::spawner::maybe_spawn;
use super::state::{GameEvent, GamePhase, WorldState};
use crate::tuning::{Tuning, TuningError};

/// The simulation core: one writer, advanced one frame at a time
#[derive(Debug, Clone)]
pub struct Simulation {
    state: WorldState,
    tuning: Tuning,
    /// Seed of the current RNG stream
    seed: u64,
    rng: Pcg32,
    /// Best score supplied by the storage collaborator
    high_score: u64,
    /// Thrust level on the previous tick (for edge detection)
    prev_thrust: bool,
}

impl Simulation {
    /// Create a simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a simulation with custom tuning (validate it first)
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: WorldState::new(&tuning),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            high_score: 0,
            prev_thrust: false,
        }
    }

    /// Create a simulation from a JSON tuning override (missing keys keep their defaults)
    pub fn from_tuning_json(seed: u64, json: &str) -> Result<Self, TuningError> {
        let tuning = Tuning::from_json(json)?;
        Ok(Self::with_tuning(seed, tuning))
    }

    /// Advance the game by one frame of `dt_ms` milliseconds
    pub fn tick(&mut self, thrust: bool, dt_ms: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !dt_ms.is_finite() {
            log::warn!("Discarding tick with non-finite delta {}", dt_ms);
            return events;
        }
        let dt_ms = dt_ms.clamp(0.0, self.tuning.max_dt_ms);

        let pressed = thrust && !self.prev_thrust;
        self.prev_thrust = thrust;

        match self.state.phase {
            GamePhase::Title => {
                if pressed {
                    self.state.phase = GamePhase::Running;
                    log::info!("Game started (seed {})", self.seed);
                    events.push(GameEvent::GameStarted);
                }
            }
            GamePhase::Running => self.advance(thrust, dt_ms, &mut events),
            GamePhase::GameOver => {}
        }

        events
    }

    fn advance(&mut self, thrust: bool, dt_ms: f32, events: &mut Vec<GameEvent>) {
        let tuning = &self.tuning;
        let state = &mut self.state;

        advance_player(state, thrust, dt_ms, tuning, events);
        if state.life == 0 {
            self.finish(events);
            return;
        }

        advance_progress(state, dt_ms, tuning, events);
        maybe_spawn(state, tuning, &mut self.rng);
        advance_obstacles(state, dt_ms, tuning, events);
        if state.life == 0 {
            self.finish(events);
        }
    }

    /// Enter GameOver and report the final score
    fn finish(&mut self, events: &mut Vec<GameEvent>) {
        let final_score = self.state.score;
        self.state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: score {}, distance {:.1}",
            final_score,
            self.state.camera_distance
        );
        events.push(GameEvent::GameOver { final_score });

        if final_score > self.high_score {
            log::info!("New high score {} (was {})", final_score, self.high_score);
            events.push(GameEvent::NewHighScore {
                score: final_score,
                previous: self.high_score,
            });
            self.high_score = final_score;
        }
    }

    /// Read-only view of the world for rendering and UI
    pub fn snapshot(&self) -> &WorldState {
        &self.state
    }

    /// Mutable world access for scripted test setups only
    ///
    /// Hosts must not write the world between ticks; `tick` is the only writer.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Reset everything to the title screen; the RNG stream continues
    ///
    /// The thrust edge tracker is kept, so a key still held from the last run
    /// has to be released before it can start the next one.
    pub fn restart(&mut self) {
        self.state = WorldState::new(&self.tuning);
        log::info!("Restarted");
    }

    /// Reset to the title screen with a fresh RNG stream
    pub fn restart_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.restart();
    }

    /// Current spawn-rate multiplier (1.0 at score 0)
    pub fn difficulty_multiplier(&self) -> f32 {
        difficulty_multiplier(self.state.score, &self.tuning)
    }

    /// Best score to compare against at game over
    pub fn set_high_score(&mut self, score: u64) {
        self.high_score = score;
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

//! World state and core simulation types
//!
//! `WorldState` is the single aggregate the simulation mutates. Presentation
//! code only ever sees it through a shared borrow or a clone taken between ticks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;
use crate::wrap_angle;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first thrust input
    Title,
    /// Active gameplay
    Running,
    /// Run ended, state frozen until restart
    GameOver,
}

/// Notifications for the presentation layer (UI, audio, storage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// First thrust input left the title screen
    GameStarted,
    /// Craft scraped the tunnel wall
    WallHit { damage: u32 },
    /// Craft flew into an obstacle (obstacle removed)
    ObstacleHit { id: u32, damage: u32 },
    /// Score increased this tick
    ScoreChanged { score: u64 },
    /// Life reached zero
    GameOver { final_score: u64 },
    /// Final score beat the best score supplied by the storage collaborator
    NewHighScore { score: u64, previous: u64 },
}

/// A spinning obstacle floating in the tunnel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Lateral x, vertical y, forward z
    pub position: Vec3,
    /// Euler angles (radians, wrapped to [0, 2π))
    pub rotation: Vec3,
    /// Radians per reference frame, fixed at spawn
    pub angular_velocity: Vec3,
}

impl Obstacle {
    /// Advance the cosmetic spin by `scale` reference frames
    pub fn spin(&mut self, scale: f32) {
        let r = self.rotation + self.angular_velocity * scale;
        self.rotation = Vec3::new(wrap_angle(r.x), wrap_angle(r.y), wrap_angle(r.z));
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Remaining life in [0, max_life]
    pub life: u32,
    /// floor(camera_distance * score_per_unit)
    pub score: u64,
    /// Vertical displacement from the tunnel axis
    pub player_offset: f32,
    /// Vertical velocity, units per reference frame
    pub player_velocity: f32,
    /// Forward progress along the tunnel
    pub camera_distance: f32,
    /// Forward speed, units per reference frame
    pub speed: f32,
    /// Milliseconds spent running
    pub elapsed_ms: f32,
    pub phase: GamePhase,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Next obstacle ID
    next_id: u32,
}

impl WorldState {
    /// Fresh title-screen state
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            life: tuning.max_life,
            score: 0,
            player_offset: 0.0,
            player_velocity: 0.0,
            camera_distance: 0.0,
            speed: tuning.base_speed,
            elapsed_ms: 0.0,
            phase: GamePhase::Title,
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// World position of the craft
    pub fn player_position(&self, tuning: &Tuning) -> Vec3 {
        Vec3::new(
            0.0,
            self.player_offset,
            self.camera_distance + tuning.player_forward_lead,
        )
    }

    /// Subtract damage with a floor at zero. Returns true once life is gone.
    pub fn apply_damage(&mut self, damage: u32) -> bool {
        self.life = self.life.saturating_sub(damage);
        self.life == 0
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

//! Tunnel Runner - an endless runner through a procedurally extended tunnel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, scoring, phases)
//! - `tuning`: Data-driven game balance
//! - `input`: Thrust sampling over keyboard, pointer and touch
//! - `platform`: Frame clock and the browser binding
//! - `highscores`: Persisted leaderboard (LocalStorage on web)

pub mod highscores;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use input::{InputSource, ThrustSampler};
pub use sim::{GameEvent, GamePhase, Simulation, WorldState};
pub use tuning::{Tuning, TuningError};

/// Default balance constants
///
/// Times are milliseconds, per-frame quantities are per reference frame.
pub mod consts {
    /// Reference frame interval; per-frame rates are scaled by `dt / REF_DT_MS`
    pub const REF_DT_MS: f32 = 16.67;
    /// Longest delta a single tick will integrate
    pub const MAX_DT_MS: f32 = 100.0;

    /// Tunnel geometry
    pub const TUNNEL_HALF_WIDTH: f32 = 1.8;

    /// Player craft
    pub const PLAYER_ACCEL: f32 = 0.004;
    pub const PLAYER_MAX_VELOCITY: f32 = 0.08;
    /// Craft sits this far ahead of the camera
    pub const PLAYER_FORWARD_LEAD: f32 = 3.0;

    /// Life and damage
    pub const MAX_LIFE: u32 = 100;
    pub const WALL_DAMAGE: u32 = 10;
    pub const OBSTACLE_DAMAGE: u32 = 20;

    /// Forward progress
    pub const BASE_SPEED: f32 = 0.1;
    /// Speed gained per elapsed millisecond
    pub const SPEED_GROWTH: f32 = 0.000_002;
    pub const SCORE_PER_UNIT: f32 = 10.0;
    /// Score at which the difficulty multiplier reaches 2.0
    pub const SCORE_SCALE: f32 = 1000.0;

    /// Obstacles
    pub const BASE_SPAWN_RATE: f32 = 0.02;
    pub const SPAWN_LEAD: f32 = 40.0;
    pub const SPAWN_SPAN: f32 = 3.0;
    pub const OBSTACLE_SPIN_MAX: f32 = 0.05;
    pub const COLLISION_RADIUS: f32 = 0.5;
    pub const TRAILING_MARGIN: f32 = 5.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid rounds tiny negatives up to TAU
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

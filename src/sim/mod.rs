//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-time scaled against a reference frame, clamped per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod player;
pub mod progress;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{
    Wall, WallContact, behind_camera, point_sphere_collision, segment_sphere_collision,
    wall_collision,
};
pub use obstacles::advance_obstacles;
pub use player::advance_player;
pub use progress::{advance_progress, difficulty_multiplier, score_for_distance};
pub use spawner::maybe_spawn;
pub use state::{GameEvent, GamePhase, Obstacle, WorldState};
pub use tick::Simulation;

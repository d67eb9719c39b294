//! Obstacle spawner
//!
//! One random trial per running tick. The RNG is passed in so a seeded
//! generator reproduces the same obstacle field.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::progress::difficulty_multiplier;
use super::state::{Obstacle, WorldState};
use crate::tuning::Tuning;

/// Run the per-tick spawn trial. Returns the new obstacle's ID if one spawned.
///
/// At most one obstacle per tick, however long the tick was.
pub fn maybe_spawn<R: Rng>(
    state: &mut WorldState,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<u32> {
    let spawn_rate = tuning.base_spawn_rate * difficulty_multiplier(state.score, tuning);
    let roll: f32 = rng.random();
    if roll >= spawn_rate {
        return None;
    }

    let half_span = tuning.spawn_span / 2.0;
    let position = Vec3::new(
        rng.random_range(-half_span..=half_span),
        rng.random_range(-half_span..=half_span),
        state.camera_distance + tuning.spawn_lead,
    );
    let rotation = Vec3::new(
        rng.random_range(0.0..TAU),
        rng.random_range(0.0..TAU),
        rng.random_range(0.0..TAU),
    );
    let angular_velocity = Vec3::new(
        spin(rng, tuning.obstacle_spin_max),
        spin(rng, tuning.obstacle_spin_max),
        spin(rng, tuning.obstacle_spin_max),
    );

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        position,
        rotation,
        angular_velocity,
    });
    log::debug!(
        "Spawned obstacle {} at ({:.2}, {:.2}, {:.1})",
        id,
        position.x,
        position.y,
        position.z
    );
    Some(id)
}

fn spin<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(-max..max)
    } else {
        0.0
    }
}

//! Obstacle update, collision and pruning
//!
//! Every obstacle is visited exactly once per tick. Hits are collected during
//! the pass and damage is applied afterwards, so removals never shift the
//! obstacles still waiting to be processed.

use glam::Vec3;

use super::collision::{behind_camera, segment_sphere_collision};
use super::state::{GameEvent, WorldState};
use crate::tuning::Tuning;

/// Spin obstacles, resolve hits against the craft and drop the ones left behind
pub fn advance_obstacles(
    state: &mut WorldState,
    dt_ms: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let scale = tuning.frame_scale(dt_ms);
    let player = state.player_position(tuning);
    // The craft covered this tick's forward step on the way here
    let swept_from = player - Vec3::Z * (state.speed * scale);
    let camera_distance = state.camera_distance;

    let mut hits: Vec<u32> = Vec::new();
    let mut pruned = 0usize;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.spin(scale);

        if segment_sphere_collision(swept_from, player, obstacle.position, tuning.collision_radius)
        {
            hits.push(obstacle.id);
            false
        } else if behind_camera(obstacle.position.z, camera_distance, tuning.trailing_margin) {
            pruned += 1;
            false
        } else {
            true
        }
    });

    if pruned > 0 {
        log::trace!("Pruned {} obstacles behind the camera", pruned);
    }

    // Apply damage in spawn order
    for id in hits {
        state.apply_damage(tuning.obstacle_damage);
        log::debug!("Obstacle {} hit, life {}", id, state.life);
        events.push(GameEvent::ObstacleHit {
            id,
            damage: tuning.obstacle_damage,
        });
    }
}

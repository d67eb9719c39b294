//! Player kinematics
//!
//! Thrust pushes the craft up, releasing it lets it fall. Touching a wall costs
//! life and kicks the craft back toward the axis at full speed.

use super::collision::wall_collision;
use super::state::{GameEvent, WorldState};
use crate::tuning::Tuning;

/// Integrate the craft's vertical motion for one tick and resolve wall hits
pub fn advance_player(
    state: &mut WorldState,
    thrust: bool,
    dt_ms: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let scale = tuning.frame_scale(dt_ms);
    let vmax = tuning.player_max_velocity;
    let half_width = tuning.tunnel_half_width;

    let accel = if thrust {
        tuning.player_accel
    } else {
        -tuning.player_accel
    };
    state.player_velocity = (state.player_velocity + accel * scale).clamp(-vmax, vmax);
    state.player_offset += state.player_velocity * scale;

    if let Some(contact) = wall_collision(state.player_offset, half_width) {
        // Fixed rebound speed, not an elastic reflection
        state.player_velocity = -contact.wall.sign() * vmax;
        state.apply_damage(tuning.wall_damage);
        log::debug!(
            "Wall hit ({:?}, {:.3} past), life {}",
            contact.wall,
            contact.penetration,
            state.life
        );
        events.push(GameEvent::WallHit {
            damage: tuning.wall_damage,
        });
    }

    state.player_offset = state.player_offset.clamp(-half_width, half_width);
}

//! Forward progress, scoring and difficulty

use super::state::{GameEvent, WorldState};
use crate::tuning::Tuning;

/// Spawn-rate multiplier for a given score: 1.0 at zero, +1.0 per `score_scale`
pub fn difficulty_multiplier(score: u64, tuning: &Tuning) -> f32 {
    1.0 + score as f32 / tuning.score_scale
}

/// Score for a forward distance
#[inline]
pub fn score_for_distance(camera_distance: f32, tuning: &Tuning) -> u64 {
    (camera_distance * tuning.score_per_unit).floor().max(0.0) as u64
}

/// Move the camera forward and refresh speed and score
pub fn advance_progress(
    state: &mut WorldState,
    dt_ms: f32,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    state.elapsed_ms += dt_ms;
    // Unbounded linear ramp
    state.speed = tuning.base_speed + tuning.speed_growth * state.elapsed_ms;
    state.camera_distance += state.speed * tuning.frame_scale(dt_ms);

    let score = score_for_distance(state.camera_distance, tuning);
    if score > state.score {
        events.push(GameEvent::ScoreChanged { score });
    }
    state.score = score;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_multiplier_is_linear() {
        let tuning = Tuning::default();
        assert_eq!(difficulty_multiplier(0, &tuning), 1.0);
        assert_eq!(difficulty_multiplier(500, &tuning), 1.5);
        assert_eq!(difficulty_multiplier(1000, &tuning), 2.0);
    }

    #[test]
    fn test_progress_tracks_score() {
        let tuning = Tuning::default();
        let mut state = WorldState::new(&tuning);
        let mut events = Vec::new();
        for _ in 0..100 {
            advance_progress(&mut state, REF_DT_MS, &tuning, &mut events);
            assert_eq!(
                state.score,
                (state.camera_distance * SCORE_PER_UNIT).floor() as u64
            );
        }
        assert!(state.camera_distance > 100.0 * BASE_SPEED);
        assert!(!events.is_empty());
    }

    #[test]
    fn test_speed_grows_with_time() {
        let tuning = Tuning::default();
        let mut state = WorldState::new(&tuning);
        let mut events = Vec::new();
        advance_progress(&mut state, REF_DT_MS, &tuning, &mut events);
        let early = state.speed;
        state.elapsed_ms = 60_000.0;
        advance_progress(&mut state, REF_DT_MS, &tuning, &mut events);
        assert!(state.speed > early);
        assert!((state.speed - (BASE_SPEED + SPEED_GROWTH * state.elapsed_ms)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let tuning = Tuning::default();
        let mut state = WorldState::new(&tuning);
        let mut events = Vec::new();
        advance_progress(&mut state, 0.0, &tuning, &mut events);
        assert_eq!(state.camera_distance, 0.0);
        assert_eq!(state.score, 0);
        assert!(events.is_empty());
    }
}

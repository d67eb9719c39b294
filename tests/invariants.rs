//! Property tests: world invariants hold after every tick for arbitrary input

use std::collections::HashSet;

use proptest::prelude::*;
use tunnel_runner::consts::*;
use tunnel_runner::{GameEvent, GamePhase, Simulation, Tuning};

fn frame_delta() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => 0.0f32..40.0,
        1 => 40.0f32..5_000.0,
        1 => Just(f32::NAN),
        1 => Just(-16.0f32),
    ]
}

fn check_invariants(sim: &Simulation) -> Result<(), TestCaseError> {
    let state = sim.snapshot();
    let tuning = sim.tuning();

    prop_assert!(state.life <= tuning.max_life);
    prop_assert!(state.player_offset.abs() <= tuning.tunnel_half_width);
    prop_assert!(state.player_velocity.abs() <= tuning.player_max_velocity);
    prop_assert_eq!(
        state.score,
        (state.camera_distance * tuning.score_per_unit).floor() as u64
    );
    if state.life == 0 {
        prop_assert_eq!(state.phase, GamePhase::GameOver);
    }

    let mut ids = HashSet::new();
    for obstacle in &state.obstacles {
        prop_assert!(ids.insert(obstacle.id), "duplicate obstacle id");
        prop_assert!(obstacle.position.z >= state.camera_distance - tuning.trailing_margin);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_for_any_input(
        seed in any::<u64>(),
        spawn_rate in 0.0f32..0.5,
        frames in prop::collection::vec((any::<bool>(), frame_delta()), 1..400),
    ) {
        let tuning = Tuning { base_spawn_rate: spawn_rate, ..Default::default() };
        let mut sim = Simulation::with_tuning(seed, tuning);

        let mut last_distance = 0.0f32;
        let mut last_elapsed = 0.0f32;
        let mut last_score = 0u64;
        let mut game_overs = 0;

        for (thrust, dt) in frames {
            let events = sim.tick(thrust, dt);
            check_invariants(&sim)?;

            let state = sim.snapshot();
            prop_assert!(state.camera_distance >= last_distance);
            prop_assert!(state.elapsed_ms >= last_elapsed);
            prop_assert!(state.score >= last_score);
            last_distance = state.camera_distance;
            last_elapsed = state.elapsed_ms;
            last_score = state.score;

            for event in &events {
                if let GameEvent::GameOver { final_score } = event {
                    prop_assert_eq!(*final_score, state.score);
                    game_overs += 1;
                }
            }
        }
        prop_assert!(game_overs <= 1);
    }

    #[test]
    fn held_thrust_never_slows_the_climb(dts in prop::collection::vec(1.0f32..33.0, 1..60)) {
        let tuning = Tuning { base_spawn_rate: 0.0, ..Default::default() };
        let mut sim = Simulation::with_tuning(0, tuning);
        sim.tick(true, REF_DT_MS);

        let mut last_velocity = sim.snapshot().player_velocity;
        for dt in dts {
            let events = sim.tick(true, dt);
            if events.iter().any(|e| matches!(e, GameEvent::WallHit { .. })) {
                // Bounced off the ceiling; the climb is over
                break;
            }
            let velocity = sim.snapshot().player_velocity;
            prop_assert!(velocity >= last_velocity);
            prop_assert!(velocity <= PLAYER_MAX_VELOCITY);
            last_velocity = velocity;
        }
    }

    #[test]
    fn restart_is_idempotent(
        seed in any::<u64>(),
        frames in prop::collection::vec((any::<bool>(), 0.0f32..50.0), 0..200),
    ) {
        let mut sim = Simulation::new(seed);
        for (thrust, dt) in frames {
            sim.tick(thrust, dt);
        }
        sim.restart();
        let first = sim.snapshot().clone();
        sim.restart();
        prop_assert_eq!(sim.snapshot(), &first);
    }
}

//! Tunnel Runner entry point
//!
//! Natively this runs a headless session with an autopilot at 60 Hz and logs
//! every event. The browser build starts from `platform::web` instead.

#[cfg(not(target_arch = "wasm32"))]
use tunnel_runner::{
    GameEvent, GamePhase, HighScores, InputSource, Simulation, ThrustSampler, WorldState,
    consts::REF_DT_MS, platform::FrameClock, tuning::Tuning,
};

/// Hard cap on a headless session (10 minutes of game time)
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 36_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tunnel Runner (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(1);

    let mut high_scores = HighScores::load();
    let mut sim = Simulation::with_tuning(seed, Tuning::load());
    sim.set_high_score(high_scores.best());
    log::info!("Game initialized with seed: {}", seed);

    let mut input = ThrustSampler::new();
    let mut clock = FrameClock::new();
    let mut now_ms = 0.0f64;
    clock.frame(now_ms);

    for _ in 0..MAX_TICKS {
        now_ms += f64::from(REF_DT_MS);
        let dt = clock.frame(now_ms);

        let wants_thrust = match sim.snapshot().phase {
            // Tap to start
            GamePhase::Title => !input.thrust(),
            _ => autopilot(sim.snapshot(), sim.tuning()),
        };
        input.set(InputSource::Key, wants_thrust);

        let thrust = input.thrust();
        for event in sim.tick(thrust, dt) {
            match event {
                GameEvent::ScoreChanged { .. } => log::trace!("{:?}", event),
                _ => log::info!("{:?}", event),
            }
        }

        if sim.snapshot().phase == GamePhase::GameOver {
            break;
        }
    }

    let state = sim.snapshot();
    if let Some(rank) = high_scores.add_score(state.score, state.camera_distance, now_ms) {
        log::info!("Run ranked #{}", rank);
        high_scores.save();
    }
    println!(
        "Final score {} (distance {:.1}, life {}, difficulty {:.2})",
        state.score,
        state.camera_distance,
        state.life,
        sim.difficulty_multiplier()
    );
}

/// Steer toward the tunnel axis, or away from the nearest obstacle ahead
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &WorldState, tuning: &Tuning) -> bool {
    let player = state.player_position(tuning);
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.position.z > player.z && o.position.z - player.z < 15.0)
        .filter(|o| o.position.x.abs() < tuning.collision_radius * 2.0)
        .min_by(|a, b| a.position.z.total_cmp(&b.position.z));

    let target = match threat {
        Some(o) if o.position.y >= 0.0 => o.position.y - 1.0,
        Some(o) => o.position.y + 1.0,
        None => 0.0,
    }
    .clamp(-tuning.tunnel_half_width * 0.8, tuning.tunnel_half_width * 0.8);

    // Lead by a few frames of velocity so the craft doesn't overshoot
    state.player_offset + state.player_velocity * 8.0 < target
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

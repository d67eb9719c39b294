//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! document only needs the keys it wants to override; missing keys keep their
//! defaults. Persisted in LocalStorage on web.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning document was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance parameters for one simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // Timing
    pub ref_dt_ms: f32,
    pub max_dt_ms: f32,

    // Player
    pub tunnel_half_width: f32,
    pub player_accel: f32,
    pub player_max_velocity: f32,
    pub player_forward_lead: f32,

    // Life
    pub max_life: u32,
    pub wall_damage: u32,
    pub obstacle_damage: u32,

    // Progress and difficulty
    pub base_speed: f32,
    pub speed_growth: f32,
    pub score_per_unit: f32,
    pub score_scale: f32,

    // Obstacles
    pub base_spawn_rate: f32,
    pub spawn_lead: f32,
    pub spawn_span: f32,
    pub obstacle_spin_max: f32,
    pub collision_radius: f32,
    pub trailing_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ref_dt_ms: REF_DT_MS,
            max_dt_ms: MAX_DT_MS,

            tunnel_half_width: TUNNEL_HALF_WIDTH,
            player_accel: PLAYER_ACCEL,
            player_max_velocity: PLAYER_MAX_VELOCITY,
            player_forward_lead: PLAYER_FORWARD_LEAD,

            max_life: MAX_LIFE,
            wall_damage: WALL_DAMAGE,
            obstacle_damage: OBSTACLE_DAMAGE,

            base_speed: BASE_SPEED,
            speed_growth: SPEED_GROWTH,
            score_per_unit: SCORE_PER_UNIT,
            score_scale: SCORE_SCALE,

            base_spawn_rate: BASE_SPAWN_RATE,
            spawn_lead: SPAWN_LEAD,
            spawn_span: SPAWN_SPAN,
            obstacle_spin_max: OBSTACLE_SPIN_MAX,
            collision_radius: COLLISION_RADIUS,
            trailing_margin: TRAILING_MARGIN,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and not negative",
        })
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "tunnel_runner_tuning";

    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field is in a range the simulation can integrate
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("ref_dt_ms", self.ref_dt_ms)?;
        positive("max_dt_ms", self.max_dt_ms)?;
        positive("tunnel_half_width", self.tunnel_half_width)?;
        positive("player_max_velocity", self.player_max_velocity)?;
        positive("collision_radius", self.collision_radius)?;
        positive("score_scale", self.score_scale)?;
        positive("score_per_unit", self.score_per_unit)?;

        non_negative("player_accel", self.player_accel)?;
        non_negative("player_forward_lead", self.player_forward_lead)?;
        non_negative("base_speed", self.base_speed)?;
        non_negative("speed_growth", self.speed_growth)?;
        non_negative("base_spawn_rate", self.base_spawn_rate)?;
        non_negative("spawn_lead", self.spawn_lead)?;
        non_negative("spawn_span", self.spawn_span)?;
        non_negative("obstacle_spin_max", self.obstacle_spin_max)?;
        non_negative("trailing_margin", self.trailing_margin)?;

        if self.max_life == 0 {
            return Err(TuningError::Invalid {
                field: "max_life",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Scale factor that turns a per-reference-frame rate into a per-tick step
    #[inline]
    pub fn frame_scale(&self, dt_ms: f32) -> f32 {
        dt_ms / self.ref_dt_ms
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "wall_damage": 25, "spawn_lead": 60.0 }"#).unwrap();
        assert_eq!(tuning.wall_damage, 25);
        assert_eq!(tuning.spawn_lead, 60.0);
        assert_eq!(tuning.tunnel_half_width, TUNNEL_HALF_WIDTH);
        assert_eq!(tuning.max_life, MAX_LIFE);
    }

    #[test]
    fn test_rejects_zero_ref_dt() {
        let err = Tuning::from_json(r#"{ "ref_dt_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "ref_dt_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_spawn_rate() {
        let tuning = Tuning {
            base_spawn_rate: -0.1,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_frame_scale_is_one_at_reference_interval() {
        let tuning = Tuning::default();
        assert!((tuning.frame_scale(REF_DT_MS) - 1.0).abs() < 1e-6);
    }
}

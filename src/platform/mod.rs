//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (frame clock)
//! - The JS-facing game binding (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Turns monotonic frame timestamps (ms) into per-tick deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame in milliseconds
    ///
    /// The first frame, a timestamp that went backwards or a non-finite
    /// timestamp all yield 0.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) if now_ms >= last => (now_ms - last) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp (tab hidden, game paused)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

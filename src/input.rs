//! Thrust input sampling
//!
//! Keyboard, mouse and touch all mean the same thing: "go up". Each source is
//! tracked on its own so releasing the mouse doesn't cancel a held key.

/// A physical input that can hold thrust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Key,
    Pointer,
    Touch,
}

impl InputSource {
    fn bit(self) -> u8 {
        match self {
            InputSource::Key => 1,
            InputSource::Pointer => 1 << 1,
            InputSource::Touch => 1 << 2,
        }
    }
}

/// Aggregates held input sources into one thrust signal per tick
#[derive(Debug, Clone, Default)]
pub struct ThrustSampler {
    held: u8,
}

impl ThrustSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, source: InputSource) {
        self.held |= source.bit();
    }

    pub fn release(&mut self, source: InputSource) {
        self.held &= !source.bit();
    }

    /// Set a source from a down/up flag
    pub fn set(&mut self, source: InputSource, down: bool) {
        if down {
            self.press(source);
        } else {
            self.release(source);
        }
    }

    /// Drop every hold (window blur, tab hidden)
    pub fn release_all(&mut self) {
        self.held = 0;
    }

    pub fn is_held(&self, source: InputSource) -> bool {
        self.held & source.bit() != 0
    }

    /// True while any source is held. This is a level; `Simulation` finds the edges.
    pub fn thrust(&self) -> bool {
        self.held != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_source_asserts_thrust() {
        let mut sampler = ThrustSampler::new();
        assert!(!sampler.thrust());

        sampler.press(InputSource::Touch);
        assert!(sampler.thrust());
        assert!(sampler.is_held(InputSource::Touch));
        assert!(!sampler.is_held(InputSource::Key));
    }

    #[test]
    fn test_sources_are_independent() {
        let mut sampler = ThrustSampler::new();
        sampler.press(InputSource::Key);
        sampler.press(InputSource::Pointer);
        sampler.release(InputSource::Pointer);
        assert!(sampler.thrust(), "key still held");

        sampler.set(InputSource::Key, false);
        assert!(!sampler.thrust());
    }

    #[test]
    fn test_release_all() {
        let mut sampler = ThrustSampler::new();
        sampler.press(InputSource::Key);
        sampler.press(InputSource::Touch);
        sampler.release_all();
        assert!(!sampler.thrust());
    }

    #[test]
    fn test_thrust_is_a_level() {
        let mut sampler = ThrustSampler::new();
        sampler.press(InputSource::Pointer);
        // Reading it doesn't consume the hold
        assert!(sampler.thrust());
        assert!(sampler.thrust());

        // Pressing a held source again changes nothing
        sampler.press(InputSource::Pointer);
        sampler.release(InputSource::Pointer);
        assert!(!sampler.thrust());
    }
}

//! Seeded RNG for shape selection.
//!
//! A small LCG (Numerical Recipes constants) picks catalog entries
//! uniformly and keeps games reproducible from a seed.

#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero seed would lock the low bits; nudge it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max). `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next_u32() % max
    }

    /// Current state, usable as a seed to replay the rest of the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

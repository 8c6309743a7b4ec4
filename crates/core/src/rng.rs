//! RNG module - seeded pseudo-random source for puzzle generation
//!
//! A simple LCG keeps generation deterministic: the same seed always builds
//! the same puzzle, which the tests and the benchmark rely on.

use tui_wordsearch_types::NOISE_ALPHABET;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll a percent chance: true `pct` times out of 100.
    pub fn chance_percent(&mut self, pct: u32) -> bool {
        self.next_range(100) < pct
    }

    /// Uniformly random letter from the unaccented fill alphabet.
    pub fn noise_letter(&mut self) -> char {
        NOISE_ALPHABET[self.next_range(NOISE_ALPHABET.len() as u32) as usize] as char
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

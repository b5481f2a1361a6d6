//! RNG module - seeded piece generation
//!
//! Two randomizers are available:
//! - **Uniform**: every draw picks one of the 7 kinds with equal probability.
//! - **SevenBag**: each bag holds one of every kind, shuffled; draws empty the bag
//!   before a new one is shuffled.
//!
//! Both sit on a small LCG so that a seed fully determines the piece sequence.

use serde::{Deserialize, Serialize};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (seeds the next game on restart)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Which randomizer a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomizerKind {
    #[default]
    Uniform,
    SevenBag,
}

/// Deterministic source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    kind: RandomizerKind,
    rng: SimpleRng,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceGenerator {
    /// Create a new generator with the given randomizer and seed
    pub fn new(kind: RandomizerKind, seed: u32) -> Self {
        Self {
            kind,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            // Empty bag: the first bag draw shuffles.
            bag_index: PieceKind::ALL.len(),
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self.kind {
            RandomizerKind::Uniform => {
                PieceKind::from_index(self.rng.next_range(PieceKind::ALL.len() as u32) as usize)
            }
            RandomizerKind::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    pub fn randomizer(&self) -> RandomizerKind {
        self.kind
    }

    /// Get the current RNG state (for restarting with a continuing sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

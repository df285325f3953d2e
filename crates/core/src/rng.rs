//! RNG module - uniform random piece selection
//!
//! Every spawn is an independent uniform draw over the seven kinds. There is
//! no bag, so streaks and droughts are possible. Seeded games are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::types::PieceKind;

/// Seedable source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    seed: u64,
    rng: StdRng,
}

impl PieceRandomizer {
    /// Create a randomizer with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a randomizer with a fresh seed from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        let i = self.rng.gen_range(0..PieceKind::ALL.len());
        PieceKind::ALL[i]
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

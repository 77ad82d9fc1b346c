//! RNG module - uniform random piece selection
//!
//! Every draw picks one of the seven kinds with equal probability and is
//! independent of earlier draws (no bag). A seeded LCG keeps games
//! reproducible; a fixed sequence source supports scripted play.

use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Where new pieces come from.
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform random kinds from a seeded RNG.
    Random { seed: u32, rng: SimpleRng },
    /// A fixed list of kinds, repeated from the start when exhausted.
    Sequence { kinds: Vec<PieceKind>, index: usize },
}

impl PieceSource {
    pub fn random(seed: u32) -> Self {
        PieceSource::Random {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Cycle through `kinds` in order. An empty list falls back to `O`.
    pub fn sequence(kinds: impl Into<Vec<PieceKind>>) -> Self {
        PieceSource::Sequence {
            kinds: kinds.into(),
            index: 0,
        }
    }

    pub fn next_kind(&mut self) -> PieceKind {
        match self {
            PieceSource::Random { rng, .. } => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            PieceSource::Sequence { kinds, index } => {
                if kinds.is_empty() {
                    return PieceKind::O;
                }
                let kind = kinds[*index % kinds.len()];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }

    /// Seed of a random source.
    pub fn seed(&self) -> Option<u32> {
        match self {
            PieceSource::Random { seed, .. } => Some(*seed),
            PieceSource::Sequence { .. } => None,
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::random(1)
    }
}

//! RNG module - piece selection
//!
//! Each spawn picks one of the seven kinds uniformly and independently of
//! previous picks (no bag, repeats allowed). A seeded LCG keeps games
//! reproducible, and [`SequenceGenerator`] gives tests a fixed order.

use std::fmt;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of a power-of-two LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }
}

/// Source of piece kinds for spawning.
pub trait PieceGenerator: fmt::Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform, independent draw over the seven kinds.
#[derive(Debug, Clone)]
pub struct UniformGenerator {
    rng: SimpleRng,
}

impl UniformGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceGenerator for UniformGenerator {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequenceGenerator {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "sequence generator needs at least one kind");
        Self { kinds, next: 0 }
    }

    /// Always yields `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceGenerator for SequenceGenerator {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        for _ in 0..8 {
            assert_eq!(zero.next_u32(), one.next_u32());
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_generator_covers_all_kinds() {
        let mut gen = UniformGenerator::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            counts[gen.next_kind().index()] += 1;
        }
        for (i, &n) in counts.iter().enumerate() {
            // Expect ~1000 each; allow a wide margin.
            assert!((700..1300).contains(&n), "kind {} drawn {} times", i, n);
        }
    }

    #[test]
    fn test_uniform_generator_allows_repeats() {
        let mut gen = UniformGenerator::new(3);
        let draws: Vec<PieceKind> = (0..200).map(|_| gen.next_kind()).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }

    #[test]
    fn test_sequence_generator_cycles() {
        let mut gen = SequenceGenerator::new([PieceKind::I, PieceKind::O]);
        assert_eq!(gen.next_kind(), PieceKind::I);
        assert_eq!(gen.next_kind(), PieceKind::O);
        assert_eq!(gen.next_kind(), PieceKind::I);
    }
}

//! RNG module - uniform piece and color selection
//!
//! Piece kind and fill color are independent uniform draws (color is
//! cosmetic, not tied to shape identity). A small seedable LCG keeps the
//! core deterministic and testable.

use crate::types::{BlockColor, PieceKind};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform choice among the 7 piece kinds.
    pub fn random_kind(&mut self) -> PieceKind {
        let idx = self.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Uniform choice from the fixed color palette.
    pub fn random_color(&mut self) -> BlockColor {
        let idx = self.next_range(BlockColor::PALETTE.len() as u32) as usize;
        BlockColor::PALETTE[idx]
    }

    /// Current RNG state (usable as a restart seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_random_kind_covers_catalog() {
        let mut rng = SimpleRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(rng.random_kind());
        }
        assert_eq!(seen.len(), PieceKind::ALL.len());
    }

    #[test]
    fn test_random_color_stays_in_palette() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..100 {
            assert!(BlockColor::PALETTE.contains(&rng.random_color()));
        }
    }
}

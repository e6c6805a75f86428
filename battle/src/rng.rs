//! Deterministic RNG for battle resolution
//!
//! This module provides a no_std compatible RNG trait and implementation.
//! The browser client seeds from JavaScript; tests and the simulator seed
//! from fixed values for reproducible battles.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

/// Trait for random number generation in battles
pub trait BattleRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Generate a uniform value in [0, 1)
    fn unit_interval(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }

    /// Fill a byte slice with random data
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// This is suitable for game logic where cryptographic security is not needed.
/// The same seed will always produce the same sequence.
#[derive(Debug, Clone, Encode, Decode, TypeInfo)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is combined into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        // Combine both halves and ensure non-zero
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xorshift_deterministic() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_xorshift_different_seeds() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(54321);

        // Very unlikely to be equal with different seeds
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_gen_range() {
        let mut rng = XorShiftRng::seed_from_u64(42);

        for _ in 0..100 {
            let val = rng.gen_range(10);
            assert!(val < 10);
        }
    }

    #[test]
    fn test_unit_interval_bounds() {
        let mut rng = XorShiftRng::seed_from_u64(7);

        for _ in 0..1000 {
            let val = rng.unit_interval();
            assert!((0.0..1.0).contains(&val));
        }
    }

    #[test]
    fn test_fill_bytes_covers_slice() {
        let mut rng = XorShiftRng::seed_from_u64(99);
        let mut buf = [0u8; 20];
        rng.fill_bytes(&mut buf);

        // All-zero output from xorshift is impossible for a 20-byte fill
        assert!(buf.iter().any(|b| *b != 0));
    }
}

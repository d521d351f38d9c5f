//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/> implemented to satisfy the [RngCore](rand_core::RngCore) trait.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Note, 64-bit values are composed from two 32-bit draws.
//! A search leans on [random_bool](rand::Rng::random_bool) and relatives, which draw 64 bits, and a truncated draw would skew every such probability.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{RngCore, impls};

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn fixed_seeds_repeat() {
        let mut first = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut second = MinimalPCG32::from_seed(2_u64.to_le_bytes());

        for _ in 0..64 {
            assert_eq!(first.next_u32(), second.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut two_seed = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut seventy_three_seed = MinimalPCG32::from_seed(73_u64.to_le_bytes());

        let divergence = (0..64).any(|_| two_seed.next_u32() != seventy_three_seed.next_u32());
        assert!(divergence);
    }

    #[test]
    fn composed_draws_use_the_full_width() {
        let mut pcg = MinimalPCG32::from_seed(2_u64.to_le_bytes());

        let large_draw = (0..64).any(|_| pcg.next_u64() > u32::MAX as u64);
        assert!(large_draw);
    }
}

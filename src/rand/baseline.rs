//! Baseline generator: always available, not cryptographically secure.

use std::cell::Cell;

use super::hw;
use crate::{Error, Result};

/// Odd 64-bit multipliers selected per step by the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x8ebc_6af0_9c88_c6e3,
    0x5899_65cc_7537_4cc3,
];

/// Per-instance mixing generator seeded from the hardware counter.
pub struct Baseline(Cell<u64>);

impl Baseline {
    pub fn new() -> Self {
        Self::with_seed(hw::entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Baseline(Cell::new(seed))
    }

    /// Next 64 raw bits.
    #[inline]
    pub fn next_u64(&self) -> u64 {
        let state = self.0.get();
        let idx = ((state ^ (state >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // Rotate, multiply by a selected odd constant, add the Weyl increment
        let new_state = state
            .rotate_left(17)
            .wrapping_mul(MULTIPLIERS[idx])
            .wrapping_add(0x9e37_79b9_7f4a_7c15);
        self.0.set(new_state);

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform real in `[0, 1)` from the top 53 bits.
    #[inline]
    pub fn next_f64(&self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// `floor(r * n)` for a uniform real `r`.
    pub fn sample(&self, n: u64) -> Result<u64> {
        let x = (self.next_f64() * n as f64).floor() as u64;
        if x >= n {
            return Err(Error::ArithmeticFault { value: x, bound: n });
        }
        Ok(x)
    }
}

impl std::fmt::Debug for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Baseline").finish_non_exhaustive()
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new()
    }
}

//! 64-bit Mersenne Twister PRNG (MT19937-64).
//!
//! The fast random strategy. Output is fully determined by the seed, which
//! makes generated tables reproducible in tests; with the default clock
//! seed each process gets a different sequence.

use super::RandomSource;
use crate::error::GlyphMapError;

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UM: u64 = 0xFFFF_FFFF_8000_0000; // upper 33 bits
const LM: u64 = 0x7FFF_FFFF; // lower 31 bits

/// Fallback seed when the clock is unavailable.
const DEFAULT_SEED: u64 = 5489;

/// 64-bit Mersenne Twister with period 2^19937-1.
pub struct MersenneTwister {
    mt: [u64; NN],
    mti: usize,
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new()
    }
}

impl MersenneTwister {
    /// Creates a generator seeded from the system clock.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Creates a generator with a fixed, deterministic seed.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmap::random::MersenneTwister;
    ///
    /// let mut a = MersenneTwister::with_seed(42);
    /// let mut b = MersenneTwister::with_seed(42);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        let mut mt = [0u64; NN];
        mt[0] = seed;
        for i in 1..NN {
            let prev = mt[i - 1];
            mt[i] = 6364136223846793005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        MersenneTwister { mt, mti: NN }
    }

    /// Generates the next 64-bit pseudorandom value.
    pub fn next_u64(&mut self) -> u64 {
        let mag01: [u64; 2] = [0, MATRIX_A];

        if self.mti >= NN {
            for i in 0..(NN - MM) {
                let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
                self.mt[i] = self.mt[i + MM] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            }
            for i in (NN - MM)..(NN - 1) {
                let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
                self.mt[i] = self.mt[i + MM - NN] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            }
            let x = (self.mt[NN - 1] & UM) | (self.mt[0] & LM);
            self.mt[NN - 1] = self.mt[MM - 1] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            self.mti = 0;
        }

        let mut x = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }

    /// Generates a value uniformly distributed in `[0, n)`.
    ///
    /// Draws that fall in the incomplete last bucket are rejected so low
    /// values are not favoured.
    pub fn next_bounded(&mut self, n: u32) -> u32 {
        if n <= 1 {
            return 0;
        }
        let n = n as u64;
        let limit = u64::MAX - u64::MAX % n;
        loop {
            let bits = self.next_u64();
            if bits < limit {
                return (bits % n) as u32;
            }
        }
    }
}

impl RandomSource for MersenneTwister {
    fn next_symbol(&mut self, bound: u32) -> Result<u32, GlyphMapError> {
        Ok(self.next_bounded(bound))
    }
}

/// Derives a seed from the system clock.
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_secs() << 30) ^ d.subsec_nanos() as u64)
        .unwrap_or(DEFAULT_SEED)
}

//! Secure random strategy backed by the operating system.

use rand::rngs::OsRng;
use rand::RngCore;

use super::RandomSource;
use crate::error::GlyphMapError;

/// Draws symbols from [`OsRng`].
///
/// Each draw reads only as many bytes as the bound needs (one byte for
/// bounds up to 256), masks them to the next power of two and rejects
/// values at or above the bound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom {
    rng: OsRng,
}

impl SecureRandom {
    /// Creates a new secure source.
    pub fn new() -> Self {
        SecureRandom { rng: OsRng }
    }
}

impl RandomSource for SecureRandom {
    fn next_symbol(&mut self, bound: u32) -> Result<u32, GlyphMapError> {
        if bound <= 1 {
            return Ok(0);
        }
        let bits = 32 - (bound - 1).leading_zeros();
        let mask = u32::MAX >> (32 - bits);
        let width = bits.div_ceil(8) as usize;
        let mut buf = [0u8; 4];
        loop {
            self.rng
                .try_fill_bytes(&mut buf[..width])
                .map_err(|e| GlyphMapError::EntropyUnavailable(e.to_string()))?;
            let value = u32::from_le_bytes(buf) & mask;
            if value < bound {
                return Ok(value);
            }
        }
    }
}

//! Random number generation subsystem for glyphmap.
//!
//! Table generation draws its candidates through the [`RandomSource`]
//! trait. Two strategies are provided: a fast, seedable Mersenne Twister
//! and a secure source backed by the operating system.

use serde::{Deserialize, Serialize};

use crate::error::GlyphMapError;

pub mod mersenne_twister;
pub mod secure;

pub use mersenne_twister::MersenneTwister;
pub use secure::SecureRandom;

/// Supplies uniformly distributed symbols to the table generator.
///
/// Implementations hold their own state between calls; a single source is
/// reused for the lifetime of the provider that owns it.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `[0, bound)`.
    ///
    /// A `bound` of 0 or 1 always yields 0.
    ///
    /// # Errors
    /// Returns [`GlyphMapError::EntropyUnavailable`] if the underlying
    /// entropy source fails. Deterministic generators never fail.
    fn next_symbol(&mut self, bound: u32) -> Result<u32, GlyphMapError>;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_symbol(&mut self, bound: u32) -> Result<u32, GlyphMapError> {
        (**self).next_symbol(bound)
    }
}

/// Selects which [`RandomSource`] a provider builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RandomStrategy {
    /// Seeded Mersenne Twister; not suitable where unpredictability matters.
    #[default]
    Fast,
    /// Operating system entropy, one byte per draw for byte-sized bounds.
    Secure,
}

impl RandomStrategy {
    /// Builds the source for this strategy.
    ///
    /// # Parameters
    /// - `seed`: Fixed seed for [`RandomStrategy::Fast`]; the clock is used
    ///   when `None`. Ignored by [`RandomStrategy::Secure`].
    pub fn build(self, seed: Option<u64>) -> Box<dyn RandomSource + Send> {
        match self {
            RandomStrategy::Fast => match seed {
                Some(seed) => Box::new(MersenneTwister::with_seed(seed)),
                None => Box::new(MersenneTwister::new()),
            },
            RandomStrategy::Secure => {
                if seed.is_some() {
                    log::warn!("ignoring fixed seed: the secure random source cannot be seeded");
                }
                Box::new(SecureRandom::new())
            }
        }
    }
}

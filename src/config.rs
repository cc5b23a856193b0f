//! Provider configuration.
//!
//! Every field has a default, so a partial document (or none at all)
//! deserializes into a working configuration.

use serde::{Deserialize, Serialize};

use crate::charset::TargetBlock;
use crate::random::RandomStrategy;
use crate::table::DEFAULT_MAX_DRAWS_PER_CHAR;

/// Default for [`ProviderConfig::sync_encode_char_limit`].
pub const DEFAULT_SYNC_ENCODE_CHAR_LIMIT: usize = 10_000;

/// Settings used to build a [`Provider`](crate::Provider).
///
/// # Examples
///
/// ```
/// use glyphmap::config::ProviderConfig;
/// use glyphmap::random::RandomStrategy;
///
/// let config = ProviderConfig::default()
///     .with_strategy(RandomStrategy::Fast)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProviderConfig {
    /// Which random source generates tables.
    pub random: RandomStrategy,
    /// Fixed seed for the fast strategy.
    pub seed: Option<u64>,
    pub target_block: TargetBlock,
    /// Candidate draws allowed per domain character before generation fails.
    pub max_draws_per_char: u32,
    /// Advisory text length above which callers should encode off the
    /// critical path. Has no effect on encoding itself.
    pub sync_encode_char_limit: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            random: RandomStrategy::default(),
            seed: None,
            target_block: TargetBlock::default(),
            max_draws_per_char: DEFAULT_MAX_DRAWS_PER_CHAR,
            sync_encode_char_limit: DEFAULT_SYNC_ENCODE_CHAR_LIMIT,
        }
    }
}

impl ProviderConfig {
    /// Sets the random strategy used to generate tables.
    pub fn with_strategy(mut self, random: RandomStrategy) -> Self {
        self.random = random;
        self
    }

    /// Fixes the seed of the fast strategy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the block targets are drawn from.
    pub fn with_target_block(mut self, block: TargetBlock) -> Self {
        self.target_block = block;
        self
    }

    /// Sets the draw budget per domain character.
    pub fn with_max_draws_per_char(mut self, draws: u32) -> Self {
        self.max_draws_per_char = draws;
        self
    }

    /// Sets the advisory synchronous encode limit.
    pub fn with_sync_encode_char_limit(mut self, limit: usize) -> Self {
        self.sync_encode_char_limit = limit;
        self
    }
}

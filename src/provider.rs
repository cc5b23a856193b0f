//! The provider facade: owns the live map and serves encode requests.
//!
//! Readers load the current map from an [`ArcSwap`] without locking.
//! Regeneration builds a complete new map under the random source's mutex
//! and publishes it with a single pointer swap, so every encode runs
//! against one whole map, old or new.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::char_map::CharacterMap;
use crate::codec;
use crate::config::ProviderConfig;
use crate::error::GlyphMapError;
use crate::patch::{self, Edit};
use crate::random::RandomSource;
use crate::table::TableGenerator;

/// The operations a front end needs from an encoding provider.
pub trait EncodeProvider {
    /// Encodes `text` in full.
    fn encode(&self, text: &str) -> String;

    /// Brings `last_encoded` up to date with `current` after `edit`.
    ///
    /// # Errors
    /// Returns [`GlyphMapError::OutOfRange`] if `edit` does not fit the buffers.
    fn encode_incremental(
        &self,
        current: &str,
        last_encoded: String,
        edit: Edit,
    ) -> Result<String, GlyphMapError>;

    /// Replaces the live map with a freshly generated one.
    fn regenerate_table(&self) -> Result<(), GlyphMapError>;

    /// The live map's `(source, target)` pairs in domain order.
    fn encode_map(&self) -> Vec<(char, char)>;

    /// Advisory length above which callers should encode off the critical path.
    fn sync_encode_char_limit(&self) -> usize;
}

/// Owns a randomly generated [`CharacterMap`] and encodes through it.
///
/// # Examples
///
/// ```
/// use glyphmap::{Edit, Provider};
///
/// let provider = Provider::new().unwrap();
/// let encoded = provider.encode("ab");
/// let encoded = provider
///     .encode_incremental("abc", encoded, Edit::new(2, 1, 0))
///     .unwrap();
/// assert_eq!(encoded, provider.encode("abc"));
/// ```
pub struct Provider {
    map: ArcSwap<CharacterMap>,
    generator: TableGenerator,
    rng: Mutex<Box<dyn RandomSource + Send>>,
    sync_encode_char_limit: usize,
}

impl Provider {
    /// Creates a provider with the default configuration.
    ///
    /// # Errors
    /// See [`with_config`](Self::with_config).
    pub fn new() -> Result<Self, GlyphMapError> {
        Self::with_config(ProviderConfig::default())
    }

    /// Creates a provider and generates its first map.
    ///
    /// # Errors
    /// - [`GlyphMapError::InvalidTargetBlock`] if the configured block
    ///   overlaps the domain or holds invalid values.
    /// - [`GlyphMapError::TableGeneration`] if the block is too small to
    ///   cover the domain.
    /// - [`GlyphMapError::EntropyUnavailable`] if the secure source fails.
    pub fn with_config(config: ProviderConfig) -> Result<Self, GlyphMapError> {
        let generator = TableGenerator::new(config.target_block, config.max_draws_per_char)?;
        let mut rng = config.random.build(config.seed);
        let map = generator.generate(&mut *rng)?;
        log::debug!("provider created with {:?} random source", config.random);
        Ok(Provider {
            map: ArcSwap::from_pointee(map),
            generator,
            rng: Mutex::new(rng),
            sync_encode_char_limit: config.sync_encode_char_limit,
        })
    }

    /// Creates a provider serving a caller-supplied map.
    ///
    /// Every target must lie in `config.target_block`, the same block later
    /// regenerations draw from, so encoded output is never re-encoded.
    ///
    /// # Errors
    /// - [`GlyphMapError::IncompleteMap`] unless `map` covers the whole domain.
    /// - [`GlyphMapError::InvalidTargetBlock`] for a bad block.
    /// - [`GlyphMapError::TargetOutsideBlock`] for a target outside the block.
    pub fn with_map(map: CharacterMap, config: ProviderConfig) -> Result<Self, GlyphMapError> {
        if !map.is_total() {
            return Err(GlyphMapError::IncompleteMap { entries: map.len() });
        }
        let generator = TableGenerator::new(config.target_block, config.max_draws_per_char)?;
        let block = generator.block();
        if let Some(&(domain_char, target)) = map
            .entries()
            .iter()
            .find(|&&(_, target)| !block.contains(target))
        {
            return Err(GlyphMapError::TargetOutsideBlock {
                domain_char,
                target,
            });
        }
        Ok(Provider {
            map: ArcSwap::from_pointee(map),
            generator,
            rng: Mutex::new(config.random.build(config.seed)),
            sync_encode_char_limit: config.sync_encode_char_limit,
        })
    }

    /// The map currently in use.
    ///
    /// Holding the returned `Arc` pins one map across several calls, even
    /// if the table is regenerated meanwhile.
    pub fn snapshot(&self) -> Arc<CharacterMap> {
        self.map.load_full()
    }

    /// Encodes `text` in full with the live map.
    pub fn encode(&self, text: &str) -> String {
        codec::encode(&self.map.load(), text)
    }

    /// Incrementally re-encodes; see [`patch::patch`].
    ///
    /// # Errors
    /// Returns [`GlyphMapError::OutOfRange`] if `edit` does not fit the buffers.
    pub fn encode_incremental(
        &self,
        current: &str,
        last_encoded: String,
        edit: Edit,
    ) -> Result<String, GlyphMapError> {
        let map = self.map.load();
        patch::patch(Some(&**map), current, last_encoded, edit)
    }

    /// Generates a new map and swaps it in.
    ///
    /// Concurrent regenerations run one at a time. On error the current map
    /// stays installed.
    ///
    /// # Errors
    /// Returns [`GlyphMapError::TableGeneration`] or
    /// [`GlyphMapError::EntropyUnavailable`] from the generator.
    pub fn regenerate_table(&self) -> Result<(), GlyphMapError> {
        let mut rng = self.rng.lock();
        let map = self.generator.generate(&mut **rng)?;
        self.map.store(Arc::new(map));
        log::debug!("encode table regenerated");
        Ok(())
    }

    /// The live map's `(source, target)` pairs in domain order.
    pub fn encode_map(&self) -> Vec<(char, char)> {
        self.map.load().entries().to_vec()
    }

    /// Advisory text length above which callers should encode off the
    /// critical path.
    pub fn sync_encode_char_limit(&self) -> usize {
        self.sync_encode_char_limit
    }
}

impl EncodeProvider for Provider {
    fn encode(&self, text: &str) -> String {
        Provider::encode(self, text)
    }

    fn encode_incremental(
        &self,
        current: &str,
        last_encoded: String,
        edit: Edit,
    ) -> Result<String, GlyphMapError> {
        Provider::encode_incremental(self, current, last_encoded, edit)
    }

    fn regenerate_table(&self) -> Result<(), GlyphMapError> {
        Provider::regenerate_table(self)
    }

    fn encode_map(&self) -> Vec<(char, char)> {
        Provider::encode_map(self)
    }

    fn sync_encode_char_limit(&self) -> usize {
        Provider::sync_encode_char_limit(self)
    }
}

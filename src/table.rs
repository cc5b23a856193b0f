//! Collision-free table generation by rejection sampling.
//!
//! Each domain character draws candidates from the target block until it
//! finds one no earlier character has taken. The block (256 values by
//! default) is much larger than the domain (62), so retries are rare; the
//! draw budget only matters for misconfigured, undersized blocks.

use crate::char_map::CharacterMap;
use crate::charset::{domain, TargetBlock};
use crate::error::GlyphMapError;
use crate::random::RandomSource;

/// Default cap on candidate draws for a single domain character.
pub const DEFAULT_MAX_DRAWS_PER_CHAR: u32 = 4096;

/// Builds [`CharacterMap`]s over the full domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableGenerator {
    block: TargetBlock,
    max_draws_per_char: u32,
}

impl Default for TableGenerator {
    fn default() -> Self {
        TableGenerator {
            block: TargetBlock::default(),
            max_draws_per_char: DEFAULT_MAX_DRAWS_PER_CHAR,
        }
    }
}

impl TableGenerator {
    /// Creates a generator drawing from `block`.
    ///
    /// # Errors
    /// Returns [`GlyphMapError::InvalidTargetBlock`] if the block overlaps
    /// the domain or holds invalid scalar values.
    pub fn new(block: TargetBlock, max_draws_per_char: u32) -> Result<Self, GlyphMapError> {
        block.validate()?;
        Ok(TableGenerator {
            block,
            max_draws_per_char: max_draws_per_char.max(1),
        })
    }

    /// The block targets are drawn from.
    pub fn block(&self) -> TargetBlock {
        self.block
    }

    /// Generates a total, injective map.
    ///
    /// Domain characters are assigned in domain order. The map is built
    /// privately and only returned once complete, so a failure never
    /// leaves a partial map behind.
    ///
    /// # Errors
    /// - [`GlyphMapError::TableGeneration`] if some character finds no
    ///   unused target within the draw budget.
    /// - [`GlyphMapError::EntropyUnavailable`] if `rng` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmap::random::MersenneTwister;
    /// use glyphmap::TableGenerator;
    ///
    /// let mut rng = MersenneTwister::with_seed(7);
    /// let map = TableGenerator::default().generate(&mut rng).unwrap();
    /// assert!(map.is_total());
    /// ```
    pub fn generate(&self, rng: &mut dyn RandomSource) -> Result<CharacterMap, GlyphMapError> {
        let mut map = CharacterMap::empty();
        let mut total_draws = 0u64;

        for source in domain() {
            let mut attempts = 0u32;
            let target = loop {
                if attempts == self.max_draws_per_char {
                    log::debug!(
                        "table generation gave up on '{}' after {} draws",
                        source,
                        attempts
                    );
                    return Err(GlyphMapError::TableGeneration {
                        domain_char: source,
                        attempts,
                    });
                }
                attempts += 1;
                let index = rng.next_symbol(self.block.len)?;
                match self.block.get(index) {
                    Some(candidate) if !map.contains_target(candidate) => break candidate,
                    _ => {}
                }
            };
            total_draws += attempts as u64;
            map.insert(source, target)?;
        }

        log::debug!(
            "generated {} entries from block U+{:04X} in {} draws",
            map.len(),
            self.block.start as u32,
            total_draws
        );
        Ok(map)
    }
}

//! The substitution domain and the target block it maps into.
//!
//! The domain is fixed: the 62 ASCII digits and letters, enumerated as
//! digits, then lowercase, then uppercase. Targets come from a contiguous
//! block of scalar values that must not overlap the domain, so an encoded
//! character is never taken for domain input again.

use serde::{Deserialize, Serialize};

use crate::error::GlyphMapError;

/// Number of characters in the substitution domain.
pub const DOMAIN_SIZE: usize = 62;

/// First scalar value of the default target block (Cyrillic).
const DEFAULT_BLOCK_START: char = '\u{0400}';

/// Number of values in the default target block.
const DEFAULT_BLOCK_LEN: u32 = 256;

/// Returns `true` if `ch` is an ASCII digit or letter.
///
/// # Examples
///
/// ```
/// use glyphmap::charset::is_alphanumeric;
///
/// assert!(is_alphanumeric('a'));
/// assert!(is_alphanumeric('7'));
/// assert!(!is_alphanumeric('~'));
/// assert!(!is_alphanumeric('\u{0410}'));
/// ```
pub fn is_alphanumeric(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Iterates the domain in its stable order: `0-9`, `a-z`, `A-Z`.
pub fn domain() -> impl Iterator<Item = char> + Clone {
    ('0'..='9').chain('a'..='z').chain('A'..='Z')
}

/// Returns the position of `ch` in [`domain`] order, if it is a domain character.
pub fn domain_index(ch: char) -> Option<usize> {
    match ch {
        '0'..='9' => Some(ch as usize - '0' as usize),
        'a'..='z' => Some(10 + ch as usize - 'a' as usize),
        'A'..='Z' => Some(36 + ch as usize - 'A' as usize),
        _ => None,
    }
}

/// A contiguous block of `len` scalar values starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetBlock {
    pub start: char,
    pub len: u32,
}

impl Default for TargetBlock {
    fn default() -> Self {
        TargetBlock {
            start: DEFAULT_BLOCK_START,
            len: DEFAULT_BLOCK_LEN,
        }
    }
}

impl TargetBlock {
    /// Creates a block of `len` values starting at `start`.
    ///
    /// The block is not checked here; see [`validate`](Self::validate).
    pub const fn new(start: char, len: u32) -> Self {
        TargetBlock { start, len }
    }

    /// Checks that the block is usable as a target range.
    ///
    /// Every value in the block must be a valid `char` and none may be an
    /// ASCII alphanumeric.
    ///
    /// # Errors
    /// Returns [`GlyphMapError::InvalidTargetBlock`] if the block is empty,
    /// runs past `char::MAX`, crosses the surrogate gap, or overlaps the domain.
    pub fn validate(&self) -> Result<(), GlyphMapError> {
        let invalid = GlyphMapError::InvalidTargetBlock {
            start: self.start as u32,
            len: self.len,
        };
        if self.len == 0 {
            return Err(invalid);
        }
        for i in 0..self.len {
            match self.get(i) {
                Some(ch) if !is_alphanumeric(ch) => {}
                _ => return Err(invalid),
            }
        }
        Ok(())
    }

    /// Returns the `index`-th value of the block.
    ///
    /// Returns `None` if `index` is past the end of the block or the value is
    /// not a valid `char`.
    pub fn get(&self, index: u32) -> Option<char> {
        if index >= self.len {
            return None;
        }
        (self.start as u32)
            .checked_add(index)
            .and_then(char::from_u32)
    }

    /// Returns `true` if `ch` falls inside the block.
    pub fn contains(&self, ch: char) -> bool {
        let start = self.start as u32;
        let code = ch as u32;
        code >= start && code - start < self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_order_and_size() {
        let chars: Vec<char> = domain().collect();
        assert_eq!(chars.len(), DOMAIN_SIZE);
        assert_eq!(chars[0], '0');
        assert_eq!(chars[9], '9');
        assert_eq!(chars[10], 'a');
        assert_eq!(chars[35], 'z');
        assert_eq!(chars[36], 'A');
        assert_eq!(chars[61], 'Z');
    }

    #[test]
    fn test_domain_index_matches_enumeration() {
        for (i, ch) in domain().enumerate() {
            assert_eq!(domain_index(ch), Some(i), "index mismatch for '{}'", ch);
        }
        assert_eq!(domain_index(' '), None);
        assert_eq!(domain_index('\u{0410}'), None);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('A'));
        assert!(is_alphanumeric('1'));
        assert!(!is_alphanumeric('\u{0008}'));
        assert!(!is_alphanumeric('\u{001B}'));
        assert!(!is_alphanumeric('~'));
        assert!(!is_alphanumeric(' '));
        assert!(!is_alphanumeric('\u{00E4}'));
        assert!(!is_alphanumeric('我'));
        assert!(!is_alphanumeric('\u{0410}'));
    }

    #[test]
    fn test_default_block_is_valid() {
        let block = TargetBlock::default();
        assert!(block.validate().is_ok());
        assert_eq!(block.get(0), Some('\u{0400}'));
        assert_eq!(block.get(255), Some('\u{04FF}'));
        assert_eq!(block.get(256), None);
    }

    #[test]
    fn test_block_overlapping_domain_rejected() {
        let block = TargetBlock::new('+', 10);
        assert_eq!(
            block.validate(),
            Err(GlyphMapError::InvalidTargetBlock {
                start: '+' as u32,
                len: 10
            })
        );
    }

    #[test]
    fn test_empty_block_rejected() {
        assert!(TargetBlock::new('\u{0400}', 0).validate().is_err());
    }

    #[test]
    fn test_block_crossing_surrogates_rejected() {
        assert!(TargetBlock::new('\u{D7FF}', 4).validate().is_err());
    }

    #[test]
    fn test_contains() {
        let block = TargetBlock::new('\u{0400}', 256);
        assert!(block.contains('\u{0400}'));
        assert!(block.contains('\u{04FF}'));
        assert!(!block.contains('\u{0500}'));
        assert!(!block.contains('a'));
    }
}

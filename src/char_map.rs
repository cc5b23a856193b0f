//! The domain-to-target character assignment.

use std::collections::HashSet;

use crate::charset::{domain_index, DOMAIN_SIZE};
use crate::error::GlyphMapError;

/// Injective mapping from domain characters to target characters.
///
/// Entries are kept in domain order (digits, lowercase, uppercase) no matter
/// how the map was assembled. A map is immutable once built; regeneration
/// builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    entries: Vec<(char, char)>,
    lookup: [Option<char>; 128],
    used_targets: HashSet<char>,
}

impl CharacterMap {
    /// Assembles a map from `(source, target)` pairs.
    ///
    /// The map may be partial; use [`is_total`](Self::is_total) to check
    /// that every domain character is covered.
    ///
    /// # Errors
    /// - [`GlyphMapError::NonDomainSource`] if a source is not an ASCII
    ///   digit or letter.
    /// - [`GlyphMapError::DuplicateTarget`] if a source appears twice or a
    ///   target is assigned to two sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmap::CharacterMap;
    ///
    /// let map = CharacterMap::from_pairs([('a', 'A'), ('b', 'B')]).unwrap();
    /// assert_eq!(map.get('a'), Some('A'));
    /// assert!(!map.is_total());
    ///
    /// assert!(CharacterMap::from_pairs([('a', 'X'), ('b', 'X')]).is_err());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, GlyphMapError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut map = CharacterMap::empty();
        for (source, target) in pairs {
            map.insert(source, target)?;
        }
        map.entries
            .sort_by_key(|&(source, _)| domain_index(source).unwrap_or(usize::MAX));
        Ok(map)
    }

    /// Builder entry point for the generator, which inserts in domain order.
    pub(crate) fn empty() -> Self {
        CharacterMap {
            entries: Vec::with_capacity(DOMAIN_SIZE),
            lookup: [None; 128],
            used_targets: HashSet::with_capacity(DOMAIN_SIZE),
        }
    }

    pub(crate) fn insert(&mut self, source: char, target: char) -> Result<(), GlyphMapError> {
        if domain_index(source).is_none() {
            return Err(GlyphMapError::NonDomainSource(source));
        }
        let slot = &mut self.lookup[source as usize];
        if slot.is_some() || self.used_targets.contains(&target) {
            return Err(GlyphMapError::DuplicateTarget {
                domain_char: source,
                target,
            });
        }
        *slot = Some(target);
        self.used_targets.insert(target);
        self.entries.push((source, target));
        Ok(())
    }

    /// Returns the target for `ch`, or `None` if `ch` has no entry.
    #[inline]
    pub fn get(&self, ch: char) -> Option<char> {
        if ch.is_ascii() {
            self.lookup[ch as usize]
        } else {
            None
        }
    }

    /// Returns `true` if some domain character already maps to `target`.
    pub fn contains_target(&self, target: char) -> bool {
        self.used_targets.contains(&target)
    }

    /// Returns `true` if every domain character has an entry.
    pub fn is_total(&self) -> bool {
        self.entries.len() == DOMAIN_SIZE
    }

    /// The `(source, target)` pairs in domain order.
    pub fn entries(&self) -> &[(char, char)] {
        &self.entries
    }

    /// Number of domain characters with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no domain character has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

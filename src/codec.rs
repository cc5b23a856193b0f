//! Whole-string substitution through a [`CharacterMap`].

use crate::char_map::CharacterMap;

/// Encodes `text` by replacing every mapped character with its target.
///
/// Characters without an entry pass through unchanged, so the output has
/// exactly as many characters as the input. Empty and whitespace-only
/// input is returned as is without consulting the map.
///
/// # Examples
///
/// ```
/// use glyphmap::{codec, CharacterMap};
///
/// let map = CharacterMap::from_pairs([('a', 'A'), ('b', 'B')]).unwrap();
/// assert_eq!(codec::encode(&map, "a測b!"), "A測B!");
/// assert_eq!(codec::encode(&map, "  "), "  ");
/// ```
pub fn encode(map: &CharacterMap, text: &str) -> String {
    if is_blank(text) {
        return text.to_owned();
    }
    text.chars().map(|ch| map.get(ch).unwrap_or(ch)).collect()
}

/// Returns `true` for empty or whitespace-only text.
pub(crate) fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

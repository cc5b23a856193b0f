//! Incremental re-encoding.
//!
//! Instead of encoding a whole document after every keystroke, [`patch`]
//! takes the previously encoded buffer and the [`Edit`] that turned the old
//! source into the current one, and splices only the changed region.
//!
//! All positions and counts are in characters (Unicode scalar values), not
//! bytes.

use crate::char_map::CharacterMap;
use crate::codec::{self, is_blank};
use crate::error::{GlyphMapError, Region};

/// Describes how a source text changed.
///
/// `removed` characters were deleted at `offset` in the previous text, then
/// `added` characters were inserted at `offset`. The all-zero edit carries
/// no position information and requests a full encode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edit {
    pub offset: usize,
    pub added: usize,
    pub removed: usize,
}

impl Edit {
    /// Creates an edit from its offset and character counts.
    pub const fn new(offset: usize, added: usize, removed: usize) -> Self {
        Edit {
            offset,
            added,
            removed,
        }
    }

    /// Returns `true` for the all-zero edit.
    pub fn is_empty(&self) -> bool {
        self.offset == 0 && self.added == 0 && self.removed == 0
    }

    /// Derives the single edit that turns `old` into `new`.
    ///
    /// The edit spans everything between the longest common prefix and
    /// the longest common suffix that does not overlap it.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphmap::Edit;
    ///
    /// assert_eq!(Edit::between("hello", "help me"), Edit::new(3, 4, 2));
    /// assert_eq!(Edit::between("abc", "abc"), Edit::new(3, 0, 0));
    /// ```
    pub fn between(old: &str, new: &str) -> Self {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        let prefix = old
            .iter()
            .zip(new.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Edit {
            offset: prefix,
            added: new.len() - prefix - suffix,
            removed: old.len() - prefix - suffix,
        }
    }
}

/// Updates `last_encoded` to match `current` after `edit`.
///
/// Paths, checked in order:
/// 1. `current` blank or `map` absent: `current` is returned unchanged.
/// 2. `last_encoded` empty or `edit` all-zero: `current` is encoded in full.
/// 3. Otherwise the `removed` characters at `offset` are cut from
///    `last_encoded` (the whole buffer when `removed` equals its length),
///    then the `added` characters of `current` at `offset` are encoded and
///    inserted at `offset`.
///
/// Removal happens before insertion, so `offset` refers to the pre-edit
/// buffer.
///
/// # Errors
/// Returns [`GlyphMapError::OutOfRange`] if `offset` lies past the end of
/// `current`, the removed region lies outside `last_encoded`, the added
/// region lies outside `current` or past the end of the trimmed buffer, or
/// the patched buffer ends up a different length than `current`. Nothing is clamped: the caller's buffer is out
/// of step and should be rebuilt with a full encode.
///
/// # Examples
///
/// ```
/// use glyphmap::{patch, CharacterMap, Edit};
///
/// let map = CharacterMap::from_pairs([('a', 'A'), ('b', 'B'), ('c', 'C')]).unwrap();
/// let out = patch(Some(&map), "abc", "AB".to_string(), Edit::new(2, 1, 0)).unwrap();
/// assert_eq!(out, "ABC");
/// ```
pub fn patch(
    map: Option<&CharacterMap>,
    current: &str,
    last_encoded: String,
    edit: Edit,
) -> Result<String, GlyphMapError> {
    let map = match map {
        Some(map) if !is_blank(current) => map,
        _ => return Ok(current.to_owned()),
    };

    if last_encoded.is_empty() || edit.is_empty() {
        log::trace!("full encode of {} bytes", current.len());
        return Ok(codec::encode(map, current));
    }

    log::trace!("partial encode {:?}", edit);
    let source_len = current.chars().count();
    if edit.offset > source_len {
        return Err(GlyphMapError::OutOfRange {
            region: Region::Source,
            start: edit.offset,
            end: edit.offset,
            len: source_len,
        });
    }
    let mut buffer = last_encoded;

    if edit.removed > 0 {
        let len = buffer.chars().count();
        let end = checked_end(Region::Encoded, edit.offset, edit.removed, len)?;
        if edit.removed == len {
            buffer.clear();
        } else {
            let start = byte_index(&buffer, edit.offset);
            let stop = byte_index(&buffer, end);
            buffer.replace_range(start..stop, "");
        }
    }

    if edit.added > 0 {
        let end = checked_end(Region::Source, edit.offset, edit.added, source_len)?;

        let buffer_len = buffer.chars().count();
        if edit.offset > buffer_len {
            return Err(GlyphMapError::OutOfRange {
                region: Region::Encoded,
                start: edit.offset,
                end: edit.offset,
                len: buffer_len,
            });
        }

        let inserted = &current[byte_index(current, edit.offset)..byte_index(current, end)];
        let replacement = codec::encode(map, inserted);
        let at = byte_index(&buffer, edit.offset);
        buffer.insert_str(at, &replacement);
    }

    // The patched buffer must line up with the source character for character.
    let buffer_len = buffer.chars().count();
    if buffer_len != source_len {
        return Err(GlyphMapError::OutOfRange {
            region: Region::Source,
            start: 0,
            end: buffer_len,
            len: source_len,
        });
    }

    Ok(buffer)
}

/// Returns `offset + count` if that region fits in `len` characters.
fn checked_end(
    region: Region,
    offset: usize,
    count: usize,
    len: usize,
) -> Result<usize, GlyphMapError> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(end),
        end => Err(GlyphMapError::OutOfRange {
            region,
            start: offset,
            end: end.unwrap_or(usize::MAX),
            len,
        }),
    }
}

/// Byte position of the `chars`-th character of `text`.
///
/// `chars` must not exceed the character count; the end of the text maps
/// to `text.len()`.
fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}

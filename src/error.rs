//! Error types for the glyphmap library.

use std::fmt;

/// The buffer an out-of-range edit region was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The previously encoded buffer supplied by the caller.
    Encoded,
    /// The current source text supplied by the caller.
    Source,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Encoded => f.write_str("encoded buffer"),
            Region::Source => f.write_str("source text"),
        }
    }
}

/// Errors produced by the glyphmap library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphMapError {
    /// An edit descriptor references characters `start..end` of a buffer
    /// holding only `len` characters.
    OutOfRange {
        region: Region,
        start: usize,
        end: usize,
        len: usize,
    },
    /// No unused target was found for `domain_char` within the retry budget.
    TableGeneration { domain_char: char, attempts: u32 },
    /// The target block is empty, holds invalid scalar values, or overlaps
    /// the alphanumeric domain.
    InvalidTargetBlock { start: u32, len: u32 },
    /// Two domain characters were assigned the same target.
    DuplicateTarget { domain_char: char, target: char },
    /// A map entry has a source outside the alphanumeric domain.
    NonDomainSource(char),
    /// A provider was offered a map whose `target` for `domain_char` is
    /// alphanumeric or outside the configured target block.
    TargetOutsideBlock { domain_char: char, target: char },
    /// A map without an entry for every domain character was offered to a provider.
    IncompleteMap { entries: usize },
    /// The operating system entropy source failed.
    EntropyUnavailable(String),
}

impl fmt::Display for GlyphMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphMapError::OutOfRange {
                region,
                start,
                end,
                len,
            } => write!(
                f,
                "Edit region {}..{} is outside the {} of length {}",
                start, end, region, len
            ),
            GlyphMapError::TableGeneration {
                domain_char,
                attempts,
            } => write!(
                f,
                "No unused target found for '{}' after {} attempts",
                domain_char, attempts
            ),
            GlyphMapError::InvalidTargetBlock { start, len } => write!(
                f,
                "Target block U+{:04X} (+{}) is not a valid block disjoint from the domain",
                start, len
            ),
            GlyphMapError::DuplicateTarget {
                domain_char,
                target,
            } => write!(
                f,
                "Target '{}' assigned to '{}' is already in use",
                target, domain_char
            ),
            GlyphMapError::NonDomainSource(ch) => {
                write!(f, "'{}' is not an ASCII alphanumeric character", ch)
            }
            GlyphMapError::TargetOutsideBlock {
                domain_char,
                target,
            } => write!(
                f,
                "Target '{}' for '{}' is outside the target block",
                target, domain_char
            ),
            GlyphMapError::IncompleteMap { entries } => write!(
                f,
                "Character map has {} of {} domain entries",
                entries,
                crate::charset::DOMAIN_SIZE
            ),
            GlyphMapError::EntropyUnavailable(reason) => {
                write!(f, "Entropy source unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for GlyphMapError {}

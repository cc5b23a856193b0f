//! Front-end helpers that tolerate a missing provider.
//!
//! A front end may not have a provider yet (or at all). These functions
//! treat that as a no-op instead of an error, and render the encode table
//! for display.

use crate::codec::is_blank;
use crate::error::GlyphMapError;
use crate::patch::Edit;
use crate::provider::EncodeProvider;

/// Shown by [`show_map_table`] when no provider is set.
pub const NO_PROVIDER_MESSAGE: &str = ">> No encoding provider is set <<";

/// Shown by [`show_map_table`] when the provider has no entries.
pub const NO_MAP_MESSAGE: &str = ">> No encoding map is provided <<";

/// Pairs per line in the rendered table.
const PAIRS_PER_LINE: usize = 10;

/// Encodes `text` through `provider`.
///
/// Without a provider, or for blank text, `text` is returned unchanged.
pub fn encode(provider: Option<&dyn EncodeProvider>, text: &str) -> String {
    match provider {
        Some(provider) if !is_blank(text) => provider.encode(text),
        _ => text.to_owned(),
    }
}

/// Incrementally re-encodes through `provider`.
///
/// Without a provider, `current` is returned unchanged.
///
/// # Errors
/// Returns [`GlyphMapError::OutOfRange`] from the provider.
pub fn encode_incremental(
    provider: Option<&dyn EncodeProvider>,
    current: &str,
    last_encoded: String,
    edit: Edit,
) -> Result<String, GlyphMapError> {
    match provider {
        Some(provider) => provider.encode_incremental(current, last_encoded, edit),
        None => Ok(current.to_owned()),
    }
}

/// Renders the provider's encode table for display.
///
/// Falls back to [`NO_PROVIDER_MESSAGE`] or [`NO_MAP_MESSAGE`]; see
/// [`format_map_table`] for the layout.
pub fn show_map_table(provider: Option<&dyn EncodeProvider>) -> String {
    let provider = match provider {
        Some(provider) => provider,
        None => return NO_PROVIDER_MESSAGE.to_owned(),
    };
    let entries = provider.encode_map();
    if entries.is_empty() {
        return NO_MAP_MESSAGE.to_owned();
    }
    format_map_table(&entries)
}

/// Lays out `entries` as `source=target` pairs.
///
/// Pairs are separated by `,\t`, except that every tenth pair is followed
/// by `,\n` instead. The table ends with `.`.
///
/// # Examples
///
/// ```
/// use glyphmap::service::format_map_table;
///
/// assert_eq!(format_map_table(&[('a', 'A'), ('b', 'B')]), "a=A,\tb=B.");
/// ```
pub fn format_map_table(entries: &[(char, char)]) -> String {
    let mut table = String::with_capacity(entries.len() * 6);
    for (count, &(source, target)) in entries.iter().enumerate() {
        if count > 0 {
            table.push_str(if count % PAIRS_PER_LINE == 0 { ",\n" } else { ",\t" });
        }
        table.push(source);
        table.push('=');
        table.push(target);
    }
    table.push('.');
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_single_pair() {
        assert_eq!(format_map_table(&[('0', 'Ж')]), "0=Ж.");
    }

    #[test]
    fn test_format_breaks_after_tenth_pair() {
        let entries: Vec<(char, char)> = ('a'..='l').map(|c| (c, c)).collect();
        assert_eq!(
            format_map_table(&entries),
            "a=a,\tb=b,\tc=c,\td=d,\te=e,\tf=f,\tg=g,\th=h,\ti=i,\tj=j,\nk=k,\tl=l."
        );
    }

    #[test]
    fn test_no_provider() {
        assert_eq!(show_map_table(None), NO_PROVIDER_MESSAGE);
        assert_eq!(encode(None, "content"), "content");
        assert_eq!(encode(None, "   "), "   ");
        assert_eq!(
            encode_incremental(None, "abc", "AB".into(), Edit::new(2, 1, 0)).unwrap(),
            "abc"
        );
    }
}

//! glyphmap: alphanumeric substitution codec with incremental re-encoding.
//!
//! A randomly generated, collision-free table maps the 62 ASCII digits and
//! letters into a disjoint block of target characters (Cyrillic by
//! default). Text is encoded character by character; anything outside the
//! domain passes through, so output length always equals input length.
//!
//! Because lengths match, an edited document does not need a full
//! re-encode: [`patch`] splices the changed region into the previous
//! output using only the edit's offset and counts.
//!
//! This is an obfuscating substitution, not encryption. The table is small
//! and trivially recovered from ciphertext.
//!
//! # Architecture
//!
//! ```text
//! RandomSource   (fast Mersenne Twister | OS entropy)
//!     ↓
//! TableGenerator (rejection sampling, bounded retries)
//!     ↓
//! CharacterMap   (immutable, injective)
//!     ↓
//! codec::encode | patch
//!     ↓
//! Provider       (live map in an ArcSwap, swapped on regeneration)
//! ```
//!
//! # Examples
//!
//! Keep an encoded buffer in step with a growing document:
//!
//! ```
//! use glyphmap::{Edit, Provider};
//!
//! let provider = Provider::new().unwrap();
//!
//! let mut source = String::from("hello");
//! let mut encoded = provider.encode(&source);
//!
//! let before = source.clone();
//! source.push_str(" world");
//! encoded = provider
//!     .encode_incremental(&source, encoded, Edit::between(&before, &source))
//!     .unwrap();
//!
//! assert_eq!(encoded, provider.encode(&source));
//! assert_eq!(encoded.chars().count(), source.chars().count());
//! ```
//!
//! Out-of-step edits are reported rather than clamped:
//!
//! ```
//! use glyphmap::{Edit, GlyphMapError, Provider};
//!
//! let provider = Provider::new().unwrap();
//! let stale = provider.encode("old");
//! let result = provider.encode_incremental("oldish", stale, Edit::new(4, 3, 0));
//! assert!(matches!(result, Err(GlyphMapError::OutOfRange { .. })));
//! ```

#![deny(clippy::all)]

pub mod char_map;
pub mod charset;
pub mod codec;
pub mod config;
pub mod error;
pub mod patch;
pub mod provider;
pub mod random;
pub mod service;
pub mod table;

pub use char_map::CharacterMap;
pub use config::ProviderConfig;
pub use error::GlyphMapError;
pub use patch::{patch, Edit};
pub use provider::{EncodeProvider, Provider};
pub use table::TableGenerator;

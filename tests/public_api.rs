//! Behavioural tests for the public API.
//!
//! Most cases run against a swap-case table (`a↔A` … `z↔Z`, digits
//! unmapped) so expected outputs can be written by hand.

use std::collections::HashSet;

use glyphmap::charset::{domain, is_alphanumeric, DOMAIN_SIZE};
use glyphmap::error::Region;
use glyphmap::service::{self, NO_MAP_MESSAGE, NO_PROVIDER_MESSAGE};
use glyphmap::{
    codec, patch, CharacterMap, Edit, EncodeProvider, GlyphMapError, Provider, ProviderConfig,
};

/// Swaps the case of ASCII letters; leaves everything else alone.
struct MockEncodeProvider {
    map: CharacterMap,
}

impl MockEncodeProvider {
    fn new(populate: bool) -> Self {
        let pairs = if populate { swap_case_pairs() } else { Vec::new() };
        MockEncodeProvider {
            map: CharacterMap::from_pairs(pairs).unwrap(),
        }
    }
}

impl EncodeProvider for MockEncodeProvider {
    fn encode(&self, text: &str) -> String {
        codec::encode(&self.map, text)
    }

    fn encode_incremental(
        &self,
        current: &str,
        last_encoded: String,
        edit: Edit,
    ) -> Result<String, GlyphMapError> {
        patch(Some(&self.map), current, last_encoded, edit)
    }

    fn regenerate_table(&self) -> Result<(), GlyphMapError> {
        Ok(())
    }

    fn encode_map(&self) -> Vec<(char, char)> {
        self.map.entries().to_vec()
    }

    fn sync_encode_char_limit(&self) -> usize {
        usize::MAX
    }
}

fn swap_case_pairs() -> Vec<(char, char)> {
    ('a'..='z')
        .map(|c| (c, c.to_ascii_uppercase()))
        .chain(('A'..='Z').map(|c| (c, c.to_ascii_lowercase())))
        .collect()
}

fn swap_case() -> CharacterMap {
    CharacterMap::from_pairs(swap_case_pairs()).unwrap()
}

fn seeded_provider(seed: u64) -> Provider {
    let _ = env_logger::builder().is_test(true).try_init();
    Provider::with_config(ProviderConfig::default().with_seed(seed)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Table display
// ═══════════════════════════════════════════════════════════════════════

const MOCK_TABLE: &str = "a=A,\tb=B,\tc=C,\td=D,\te=E,\tf=F,\tg=G,\th=H,\ti=I,\tj=J,\n\
k=K,\tl=L,\tm=M,\tn=N,\to=O,\tp=P,\tq=Q,\tr=R,\ts=S,\tt=T,\n\
u=U,\tv=V,\tw=W,\tx=X,\ty=Y,\tz=Z,\tA=a,\tB=b,\tC=c,\tD=d,\n\
E=e,\tF=f,\tG=g,\tH=h,\tI=i,\tJ=j,\tK=k,\tL=l,\tM=m,\tN=n,\n\
O=o,\tP=p,\tQ=q,\tR=r,\tS=s,\tT=t,\tU=u,\tV=v,\tW=w,\tX=x,\n\
Y=y,\tZ=z.";

#[test]
fn show_map_table_mock_provider() {
    let provider: &dyn EncodeProvider = &MockEncodeProvider::new(true);
    assert_eq!(service::show_map_table(Some(provider)), MOCK_TABLE);
}

#[test]
fn show_map_table_without_provider() {
    assert_eq!(service::show_map_table(None), NO_PROVIDER_MESSAGE);
}

#[test]
fn show_map_table_empty_map() {
    let provider: &dyn EncodeProvider = &MockEncodeProvider::new(false);
    assert_eq!(service::show_map_table(Some(provider)), NO_MAP_MESSAGE);
}

#[test]
fn show_map_table_generated_provider() {
    let provider = seeded_provider(17);
    let table = service::show_map_table(Some(&provider as &dyn EncodeProvider));
    assert!(table.starts_with("0="));
    assert!(table.ends_with('.'));
    assert_eq!(table.matches(",\n").count(), (DOMAIN_SIZE - 1) / 10);
    assert_eq!(table.matches('=').count(), DOMAIN_SIZE);
}

// ═══════════════════════════════════════════════════════════════════════
// Full encode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn service_encode_blank_input() {
    let provider: &dyn EncodeProvider = &MockEncodeProvider::new(true);
    assert_eq!(service::encode(Some(provider), ""), "");
    assert_eq!(service::encode(Some(provider), "   "), "   ");
    assert_eq!(service::encode(Some(provider), "\t  \r\n   "), "\t  \r\n   ");
}

#[test]
fn service_encode_swaps_case() {
    let provider: &dyn EncodeProvider = &MockEncodeProvider::new(true);
    assert_eq!(service::encode(Some(provider), "abc"), "ABC");
    assert_eq!(service::encode(Some(provider), "a123bc"), "A123BC");
    assert_eq!(service::encode(Some(provider), "a測試bc"), "A測試BC");
    assert_eq!(service::encode(Some(provider), "a,b\r\n   c"), "A,B\r\n   C");
    assert_eq!(service::encode(Some(provider), "abcXYZ"), "ABCxyz");
}

#[test]
fn generated_encode_only_touches_domain() {
    let provider = seeded_provider(3);
    let text = "a測試bc";
    let encoded: Vec<char> = provider.encode(text).chars().collect();
    let original: Vec<char> = text.chars().collect();
    assert_eq!(encoded.len(), original.len());
    for (i, (&before, &after)) in original.iter().zip(encoded.iter()).enumerate() {
        if is_alphanumeric(before) {
            assert_ne!(before, after, "domain char at {} not substituted", i);
            assert!(!is_alphanumeric(after));
        } else {
            assert_eq!(before, after, "non-domain char at {} changed", i);
        }
    }
}

#[test]
fn encoding_is_not_reapplied() {
    let provider = seeded_provider(21);
    let once = provider.encode("Hello 42");
    assert_eq!(provider.encode(&once), once);
}

// ═══════════════════════════════════════════════════════════════════════
// Incremental encode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn patch_without_positions_is_full_encode() {
    let map = swap_case();
    for text in ["", "abc", "a測試bc", "  x  ", "Zz09"] {
        assert_eq!(
            patch(Some(&map), text, String::new(), Edit::default()).unwrap(),
            codec::encode(&map, text)
        );
    }
}

#[test]
fn patch_add_only() {
    let map = swap_case();
    assert_eq!(
        patch(Some(&map), "abc", "AB".to_string(), Edit::new(2, 1, 0)).unwrap(),
        "ABC"
    );
}

#[test]
fn patch_remove_only() {
    let map = swap_case();
    assert_eq!(
        patch(Some(&map), "abc", "ABCD".to_string(), Edit::new(3, 0, 1)).unwrap(),
        "ABC"
    );
}

#[test]
fn patch_out_of_range() {
    let map = swap_case();
    let err = patch(Some(&map), "oldish", "old".to_string(), Edit::new(4, 3, 0)).unwrap_err();
    assert_eq!(
        err,
        GlyphMapError::OutOfRange {
            region: Region::Source,
            start: 4,
            end: 7,
            len: 6
        }
    );
}

#[test]
fn incremental_matches_full_encode_while_typing() {
    let map = swap_case();
    let target = "The quick brown Fox jumps over 13 lazy dogs.";
    let mut source = String::new();
    let mut encoded = String::new();

    for ch in target.chars() {
        let offset = source.chars().count();
        source.push(ch);
        encoded = patch(Some(&map), &source, encoded, Edit::new(offset, 1, 0)).unwrap();
        assert_eq!(encoded, codec::encode(&map, &source), "diverged at {:?}", source);
    }
}

#[test]
fn incremental_matches_full_encode_for_scripted_edits() {
    let provider = seeded_provider(99);
    let snapshots = [
        "draft",
        "draft one",
        "Draft one",
        "Draft 1",
        "Draft 1 測試",
        "D 1 測試",
        "",
        "   ",
        "fresh start",
        "fresh restart",
    ];

    let mut previous = String::new();
    let mut encoded = String::new();
    for next in snapshots {
        let edit = Edit::between(&previous, next);
        encoded = provider.encode_incremental(next, encoded, edit).unwrap();
        assert_eq!(encoded, provider.encode(next), "diverged at {:?}", next);
        previous = next.to_string();
    }
}

#[test]
fn service_incremental_without_provider() {
    assert_eq!(
        service::encode_incremental(None, "abc", "AB".to_string(), Edit::new(2, 1, 0)).unwrap(),
        "abc"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Provider
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn provider_map_is_total_and_injective() {
    let provider = seeded_provider(5);
    let entries = provider.encode_map();
    assert_eq!(entries.len(), DOMAIN_SIZE);

    let sources: Vec<char> = entries.iter().map(|&(s, _)| s).collect();
    assert_eq!(sources, domain().collect::<Vec<_>>());

    let targets: HashSet<char> = entries.iter().map(|&(_, t)| t).collect();
    assert_eq!(targets.len(), DOMAIN_SIZE);
}

#[test]
fn regenerate_produces_new_valid_map() {
    let provider = seeded_provider(8);
    let before = provider.encode_map();
    provider.regenerate_table().unwrap();
    let after = provider.encode_map();

    assert_eq!(after.len(), DOMAIN_SIZE);
    let targets: HashSet<char> = after.iter().map(|&(_, t)| t).collect();
    assert_eq!(targets.len(), DOMAIN_SIZE);
    assert_ne!(before, after);
}

#[test]
fn seeded_providers_agree() {
    let a = seeded_provider(1234);
    let b = seeded_provider(1234);
    assert_eq!(a.encode_map(), b.encode_map());
    assert_eq!(a.encode("Same Seed 42"), b.encode("Same Seed 42"));
}

#[test]
fn config_from_json() {
    let config: ProviderConfig = serde_json::from_str(
        r#"{ "random": "secure", "sync-encode-char-limit": 2048 }"#,
    )
    .unwrap();
    let provider = Provider::with_config(config).unwrap();
    assert_eq!(provider.sync_encode_char_limit(), 2048);
    assert_eq!(provider.encode_map().len(), DOMAIN_SIZE);
}

#[test]
fn config_with_overlapping_block_rejected() {
    let config: ProviderConfig =
        serde_json::from_str(r#"{ "target-block": { "start": "a", "len": 26 } }"#).unwrap();
    assert!(matches!(
        Provider::with_config(config),
        Err(GlyphMapError::InvalidTargetBlock { .. })
    ));
}

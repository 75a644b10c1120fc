use std::sync::Arc;

use super::tier::CacheTier;
use super::tiered::{TieredCache, TieredCacheHandle, TieredLookupResult};
use super::types::{MatchTier, Tier};
use crate::hashing::Fingerprint;

fn tier_of(pairs: &[(&str, &str)]) -> CacheTier {
    let mut tier = CacheTier::new();
    for (text, key) in pairs {
        tier.insert(Fingerprint::of(text), Arc::from(*key));
    }
    tier
}

fn cache(primary: &[(&str, &str)], synonym: &[(&str, &str)]) -> TieredCache {
    TieredCache::from_parts(tier_of(primary), tier_of(synonym), 0, Vec::new())
}

#[test]
fn test_lookup_result_miss() {
    let result = TieredLookupResult::Miss;

    assert!(!result.is_hit());
    assert!(result.hit().is_none());
    assert_eq!(result.status(), MatchTier::Miss);
}

#[test]
fn test_empty_candidates_miss() {
    let cache = cache(&[("hemoglobina", "MK-1")], &[]);
    let candidates: [&str; 0] = [];
    assert_eq!(cache.lookup(&candidates), TieredLookupResult::Miss);
}

#[test]
fn test_empty_cache_misses() {
    let cache = TieredCache::empty();
    assert_eq!(cache.lookup(&["hemoglobina"]), TieredLookupResult::Miss);
    assert_eq!(cache.summary().primary_len, 0);
}

#[test]
fn test_primary_hit() {
    let cache = cache(&[("hemoglobina", "MK-1")], &[]);
    let result = cache.lookup(&["hemoglobina"]);

    assert_eq!(result.status(), MatchTier::Primary);
    let hit = result.hit().expect("hit");
    assert_eq!(&*hit.master_key, "MK-1");
    assert_eq!(hit.candidate, "hemoglobina");
    assert_eq!(hit.candidate_index, 0);
    assert_eq!(hit.fingerprint, Fingerprint::of("hemoglobina"));
}

#[test]
fn test_synonym_hit() {
    let cache = cache(&[], &[("hb", "MK-1")]);
    let result = cache.lookup(&["hb"]);
    assert_eq!(result.status(), MatchTier::Synonym);
    assert_eq!(result.into_hit().map(|h| h.master_key.to_string()), Some("MK-1".to_string()));
}

#[test]
fn test_primary_checked_before_synonym_for_same_candidate() {
    let cache = cache(&[("ast", "MK-PRIMARY")], &[("ast", "MK-SYNONYM")]);
    let result = cache.lookup(&["ast"]);

    assert!(matches!(
        &result,
        TieredLookupResult::HitPrimary(hit) if &*hit.master_key == "MK-PRIMARY"
    ));
}

#[test]
fn test_earlier_candidate_synonym_beats_later_candidate_primary() {
    let cache = cache(&[("tgo", "MK-PRIMARY")], &[("tgo (ast)", "MK-SYNONYM")]);
    let result = cache.lookup(&["tgo (ast)", "tgo"]);

    assert_eq!(result.status(), MatchTier::Synonym);
    let hit = result.hit().expect("hit");
    assert_eq!(&*hit.master_key, "MK-SYNONYM");
    assert_eq!(hit.candidate_index, 0);
}

#[test]
fn test_later_candidate_used_when_earlier_miss() {
    let cache = cache(&[("glicose", "MK-GLI")], &[]);
    let result = cache.lookup(&["glicose de jejum", "glicose jejum", "glicose"]);

    let hit = result.hit().expect("hit");
    assert_eq!(hit.candidate_index, 2);
    assert_eq!(hit.candidate, "glicose");
}

#[test]
fn test_lookup_accepts_owned_strings() {
    let cache = cache(&[("ferritina", "MK-FER")], &[]);
    let candidates = vec!["ferritina".to_string()];
    assert!(cache.lookup(&candidates).is_hit());
}

#[test]
fn test_tier_accessor() {
    let cache = cache(&[("a", "MK-1")], &[("b", "MK-1"), ("c", "MK-2")]);
    assert_eq!(cache.tier(Tier::Primary).len(), 1);
    assert_eq!(cache.tier(Tier::Synonym).len(), 2);
    assert_eq!(cache.summary().synonym_len, 2);
}

#[test]
fn test_handle_shares_cache() {
    let handle = TieredCacheHandle::new(cache(&[("tsh", "MK-TSH")], &[]));
    let clone = handle.clone();

    assert_eq!(handle.strong_count(), 2);
    assert!(clone.lookup(&["tsh"]).is_hit());
    assert_eq!(clone.cache().primary().len(), 1);
}

#[test]
fn test_handle_concurrent_reads() {
    let handle = TieredCacheHandle::new(cache(&[("tsh", "MK-TSH")], &[("t4 livre", "MK-T4")]));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let handle = handle.clone();
            scope.spawn(move || {
                for _ in 0..1_000 {
                    assert_eq!(handle.lookup(&["tsh"]).status(), MatchTier::Primary);
                    assert_eq!(handle.lookup(&["t4 livre"]).status(), MatchTier::Synonym);
                }
            });
        }
    });
}

//! Tiered cache: primary (canonical names) then synonym.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::tier::CacheTier;
use super::types::{MatchTier, Tier};
use crate::hashing::Fingerprint;

/// The candidate that produced a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHit {
    pub master_key: Arc<str>,
    pub candidate: String,
    /// Position of `candidate` in the list passed to [`TieredCache::lookup`].
    pub candidate_index: usize,
    pub fingerprint: Fingerprint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TieredLookupResult {
    HitPrimary(TierHit),
    HitSynonym(TierHit),
    Miss,
}

impl TieredLookupResult {
    pub fn status(&self) -> MatchTier {
        match self {
            TieredLookupResult::HitPrimary(_) => MatchTier::Primary,
            TieredLookupResult::HitSynonym(_) => MatchTier::Synonym,
            TieredLookupResult::Miss => MatchTier::Miss,
        }
    }

    pub fn is_hit(&self) -> bool {
        !matches!(self, TieredLookupResult::Miss)
    }

    pub fn hit(&self) -> Option<&TierHit> {
        match self {
            TieredLookupResult::HitPrimary(hit) | TieredLookupResult::HitSynonym(hit) => Some(hit),
            TieredLookupResult::Miss => None,
        }
    }

    pub fn into_hit(self) -> Option<TierHit> {
        match self {
            TieredLookupResult::HitPrimary(hit) | TieredLookupResult::HitSynonym(hit) => Some(hit),
            TieredLookupResult::Miss => None,
        }
    }
}

/// A build-time insert that was dropped because another master key already
/// owned the fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub tier: Tier,
    pub fingerprint: Fingerprint,
    /// Candidate text whose insert was rejected.
    pub text: String,
    pub kept_master_key: String,
    pub rejected_master_key: String,
}

/// Counters recorded while the cache was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    pub entries: usize,
    pub primary_len: usize,
    pub synonym_len: usize,
    pub collisions: Vec<Collision>,
}

/// The two frozen lookup tiers.
///
/// Only [`super::CacheBuilder`] can populate one; afterwards it is read-only
/// and can be shared across threads without locking.
pub struct TieredCache {
    primary: CacheTier,
    synonym: CacheTier,
    summary: BuildSummary,
}

impl std::fmt::Debug for TieredCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieredCache")
            .field("primary", &self.primary)
            .field("synonym", &self.synonym)
            .field("collisions", &self.summary.collisions.len())
            .finish()
    }
}

impl TieredCache {
    pub(crate) fn from_parts(
        primary: CacheTier,
        synonym: CacheTier,
        entries: usize,
        collisions: Vec<Collision>,
    ) -> Self {
        let summary = BuildSummary {
            entries,
            primary_len: primary.len(),
            synonym_len: synonym.len(),
            collisions,
        };
        Self {
            primary,
            synonym,
            summary,
        }
    }

    /// A cache with both tiers empty; every lookup misses.
    pub fn empty() -> Self {
        Self::from_parts(CacheTier::new(), CacheTier::new(), 0, Vec::new())
    }

    pub fn primary(&self) -> &CacheTier {
        &self.primary
    }

    pub fn synonym(&self) -> &CacheTier {
        &self.synonym
    }

    pub fn tier(&self, tier: Tier) -> &CacheTier {
        match tier {
            Tier::Primary => &self.primary,
            Tier::Synonym => &self.synonym,
        }
    }

    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.summary.collisions
    }

    /// Tries `candidates` in order, each against primary then synonym.
    ///
    /// The first hit wins: `(c0, primary), (c0, synonym), (c1, primary), ...`.
    /// An empty candidate list is a miss.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn lookup<S: AsRef<str>>(&self, candidates: &[S]) -> TieredLookupResult {
        for (candidate_index, candidate) in candidates.iter().enumerate() {
            let candidate = candidate.as_ref();
            let fingerprint = Fingerprint::of(candidate);

            if let Some(master_key) = self.primary.get(&fingerprint) {
                debug!(candidate_index, %master_key, "primary tier hit");
                return TieredLookupResult::HitPrimary(TierHit {
                    master_key: Arc::clone(master_key),
                    candidate: candidate.to_string(),
                    candidate_index,
                    fingerprint,
                });
            }

            if let Some(master_key) = self.synonym.get(&fingerprint) {
                debug!(candidate_index, %master_key, "synonym tier hit");
                return TieredLookupResult::HitSynonym(TierHit {
                    master_key: Arc::clone(master_key),
                    candidate: candidate.to_string(),
                    candidate_index,
                    fingerprint,
                });
            }
        }

        debug!("no candidate matched either tier");
        TieredLookupResult::Miss
    }
}

/// Shared handle to a frozen [`TieredCache`].
#[derive(Clone)]
pub struct TieredCacheHandle {
    inner: Arc<TieredCache>,
}

impl TieredCacheHandle {
    pub fn new(cache: TieredCache) -> Self {
        Self {
            inner: Arc::new(cache),
        }
    }

    #[inline]
    pub fn lookup<S: AsRef<str>>(&self, candidates: &[S]) -> TieredLookupResult {
        self.inner.lookup(candidates)
    }

    #[inline]
    pub fn cache(&self) -> &TieredCache {
        &self.inner
    }

    #[inline]
    pub fn summary(&self) -> &BuildSummary {
        self.inner.summary()
    }

    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl From<TieredCache> for TieredCacheHandle {
    fn from(cache: TieredCache) -> Self {
        Self::new(cache)
    }
}

impl std::fmt::Debug for TieredCacheHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieredCacheHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}

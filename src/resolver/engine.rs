use rayon::prelude::*;
use tracing::{debug, instrument};

use super::types::{MatchOrigin, ResolutionRequest, ResolutionResult};
use crate::cache::{TieredCache, TieredCacheHandle, TieredLookupResult};
use crate::candidates::generate_candidates;
use crate::hashing::Fingerprint;

/// Resolves one request against a frozen cache.
///
/// Pure and CPU-bound: no I/O, no shared mutable state. A miss is returned as
/// [`crate::cache::MatchTier::Miss`]; calling a fallback is the caller's job.
#[instrument(
    skip_all,
    fields(
        raw_fingerprint = tracing::field::Empty,
        material = request.material.as_deref().unwrap_or_default(),
    )
)]
pub fn resolve(request: &ResolutionRequest, cache: &TieredCache) -> ResolutionResult {
    let raw_input = request.text.as_str();
    let raw_fingerprint = Fingerprint::of(raw_input);
    tracing::Span::current().record("raw_fingerprint", raw_fingerprint.short_hex().as_str());

    let candidates = generate_candidates(raw_input);
    let lookup = cache.lookup(&candidates);
    let tier = lookup.status();

    let Some(hit) = lookup.into_hit() else {
        debug!(candidates = candidates.len(), "resolution miss");
        return ResolutionResult::miss(raw_input);
    };

    let origin = if hit.candidate == raw_input.trim() {
        MatchOrigin::Original
    } else {
        MatchOrigin::Derived
    };

    debug!(
        %tier,
        master_key = %hit.master_key,
        candidate_index = hit.candidate_index,
        origin = origin.as_str(),
        "resolution hit"
    );

    ResolutionResult {
        master_key: Some(hit.master_key.to_string()),
        tier,
        matched_candidate: Some(hit.candidate),
        raw_input: raw_input.to_string(),
        raw_fingerprint,
        candidate_index: Some(hit.candidate_index),
        origin: Some(origin),
    }
}

/// Resolution engine bound to a shared, frozen cache.
#[derive(Clone, Debug)]
pub struct Resolver {
    cache: TieredCacheHandle,
}

impl Resolver {
    pub fn new(cache: impl Into<TieredCacheHandle>) -> Self {
        Self {
            cache: cache.into(),
        }
    }

    pub fn cache(&self) -> &TieredCacheHandle {
        &self.cache
    }

    #[inline]
    pub fn resolve(&self, request: &ResolutionRequest) -> ResolutionResult {
        resolve(request, self.cache.cache())
    }

    #[inline]
    pub fn resolve_text(&self, text: &str) -> ResolutionResult {
        self.resolve(&ResolutionRequest::new(text))
    }

    /// Resolves every request in parallel; results keep the input order.
    pub fn resolve_batch(&self, requests: &[ResolutionRequest]) -> Vec<ResolutionResult> {
        requests
            .par_iter()
            .map(|request| self.resolve(request))
            .collect()
    }

    /// Raw lookup for callers that generate their own candidates.
    pub fn lookup<S: AsRef<str>>(&self, candidates: &[S]) -> TieredLookupResult {
        self.cache.lookup(candidates)
    }
}

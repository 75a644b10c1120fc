use serde::Serialize;

use super::types::ResolutionResult;
use crate::cache::MatchTier;

/// Tier counts over a batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ResolutionStats {
    pub total: usize,
    pub primary_hits: usize,
    pub synonym_hits: usize,
    pub misses: usize,
    /// Share of hits in either tier, in percent. `0.0` for an empty batch.
    pub hit_rate: f64,
}

impl ResolutionStats {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ResolutionResult>) -> Self {
        let mut stats = Self::default();
        for result in results {
            stats.record(result.tier);
        }
        stats
    }

    pub fn record(&mut self, tier: MatchTier) {
        self.total += 1;
        match tier {
            MatchTier::Primary => self.primary_hits += 1,
            MatchTier::Synonym => self.synonym_hits += 1,
            MatchTier::Miss => self.misses += 1,
        }
        self.hit_rate = if self.total == 0 {
            0.0
        } else {
            (self.primary_hits + self.synonym_hits) as f64 * 100.0 / self.total as f64
        };
    }

    pub fn hits(&self) -> usize {
        self.primary_hits + self.synonym_hits
    }
}

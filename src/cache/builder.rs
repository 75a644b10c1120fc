//! Populates a [`TieredCache`] from catalog entries.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument, trace, warn};

use super::tier::CacheTier;
use super::tiered::{Collision, TieredCache};
use super::types::Tier;
use crate::candidates::generate_candidates;
use crate::catalog::{CatalogEntry, CatalogRecord, CatalogResult, validate_records};
use crate::hashing::Fingerprint;
use crate::text::canonicalize;

/// Single-writer build phase of the tiered cache.
///
/// Entries must be added in catalog order, all names before any variants: on a
/// fingerprint conflict the mapping inserted first is kept. [`CacheBuilder::build`] consumes the builder,
/// so nothing can insert into a cache once it is serving lookups.
#[derive(Debug, Default)]
pub struct CacheBuilder {
    primary: CacheTier,
    synonym: CacheTier,
    collisions: Vec<Collision>,
    entries: usize,
}

impl CacheBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache from already validated entries.
    ///
    /// Runs two passes in catalog order. The first indexes every entry's own
    /// name, the second its generated name variants and synonyms, so a variant
    /// of one entry never shadows the name of a later one.
    pub fn from_catalog<'a>(catalog: impl IntoIterator<Item = &'a CatalogEntry>) -> TieredCache {
        let catalog: Vec<&CatalogEntry> = catalog.into_iter().collect();
        let mut builder = Self::new();
        for entry in &catalog {
            builder.add_names(entry);
        }
        for entry in &catalog {
            builder.add_variants(entry);
        }
        builder.build()
    }

    /// Validates every record, then builds. A single invalid record aborts the
    /// build before anything is inserted.
    pub fn from_records(
        records: impl IntoIterator<Item = CatalogRecord>,
    ) -> CatalogResult<TieredCache> {
        let entries = validate_records(records)?;
        Ok(Self::from_catalog(&entries))
    }

    /// First pass: indexes the entry's canonical form and its lowercased name
    /// into the primary tier.
    pub fn add_names(&mut self, entry: &CatalogEntry) {
        let master_key: Arc<str> = Arc::from(entry.master_key.as_str());
        for (fingerprint, text) in name_forms(&entry.canonical_name) {
            self.insert(Tier::Primary, fingerprint, &master_key, &text);
        }
        self.entries += 1;
    }

    /// Second pass: indexes name variants into the primary tier and variants
    /// of each synonym into the synonym tier.
    pub fn add_variants(&mut self, entry: &CatalogEntry) {
        let master_key: Arc<str> = Arc::from(entry.master_key.as_str());

        let mut attempted: HashSet<Fingerprint> = name_forms(&entry.canonical_name)
            .into_iter()
            .map(|(fingerprint, _)| fingerprint)
            .collect();
        for candidate in generate_candidates(&entry.canonical_name) {
            let fingerprint = Fingerprint::of(&candidate);
            if attempted.insert(fingerprint) {
                self.insert(Tier::Primary, fingerprint, &master_key, &candidate);
            }
        }

        let mut attempted = HashSet::new();
        for synonym in &entry.synonyms {
            for candidate in generate_candidates(synonym) {
                let fingerprint = Fingerprint::of(&candidate);
                if attempted.insert(fingerprint) {
                    self.insert(Tier::Synonym, fingerprint, &master_key, &candidate);
                }
            }
        }
    }

    /// Inserts into `tier`; the return value tells whether the mapping was added.
    pub fn insert(
        &mut self,
        tier: Tier,
        fingerprint: Fingerprint,
        master_key: &Arc<str>,
        text: &str,
    ) -> bool {
        let target = match tier {
            Tier::Primary => &mut self.primary,
            Tier::Synonym => &mut self.synonym,
        };

        if target.insert(fingerprint, Arc::clone(master_key)) {
            return true;
        }

        match target.get(&fingerprint) {
            Some(existing) if existing != master_key => {
                warn!(
                    %tier,
                    fingerprint = %fingerprint.short_hex(),
                    text,
                    kept_master_key = %existing,
                    rejected_master_key = %master_key,
                    "fingerprint collision between catalog entries, keeping first"
                );
                self.collisions.push(Collision {
                    tier,
                    fingerprint,
                    text: text.to_string(),
                    kept_master_key: existing.to_string(),
                    rejected_master_key: master_key.to_string(),
                });
            }
            _ => {
                trace!(%tier, text, %master_key, "fingerprint already mapped to same key");
            }
        }
        false
    }

    /// Freezes both tiers.
    #[instrument(skip_all, fields(entries = self.entries))]
    pub fn build(self) -> TieredCache {
        let cache = TieredCache::from_parts(
            self.primary,
            self.synonym,
            self.entries,
            self.collisions,
        );
        let summary = cache.summary();
        info!(
            primary = summary.primary_len,
            synonym = summary.synonym_len,
            collisions = summary.collisions.len(),
            "tiered cache built"
        );
        cache
    }
}

/// Canonical form first, then the trimmed lowercase name, deduplicated.
/// Forms that come out empty are skipped.
fn name_forms(name: &str) -> Vec<(Fingerprint, String)> {
    let mut forms: Vec<(Fingerprint, String)> = Vec::with_capacity(2);
    for text in [canonicalize(name), name.trim().to_lowercase()] {
        if text.is_empty() {
            continue;
        }
        let fingerprint = Fingerprint::of(&text);
        if forms.iter().all(|(seen, _)| *seen != fingerprint) {
            forms.push((fingerprint, text));
        }
    }
    forms
}

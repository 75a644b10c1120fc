//! A single fingerprint -> master key mapping.

use std::collections::HashMap;
use std::sync::Arc;

use crate::hashing::Fingerprint;

/// Fingerprint -> master key map with first-writer-wins inserts.
///
/// Once a fingerprint is mapped, later inserts for it are ignored regardless of
/// the master key they carry, so the order of inserts decides precedence.
#[derive(Default, Clone)]
pub struct CacheTier {
    entries: HashMap<Fingerprint, Arc<str>>,
}

impl CacheTier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `fingerprint` to `master_key` unless it is already mapped.
    ///
    /// Returns `true` if the mapping was added, `false` if the fingerprint was
    /// present (the existing mapping is left untouched).
    pub fn insert(&mut self, fingerprint: Fingerprint, master_key: Arc<str>) -> bool {
        use std::collections::hash_map::Entry;

        match self.entries.entry(fingerprint) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(master_key);
                true
            }
        }
    }

    #[inline]
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Arc<str>> {
        self.entries.get(fingerprint)
    }

    #[inline]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CacheTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheTier")
            .field("entries", &self.entries.len())
            .finish()
    }
}

//! Two-tier exact-match cache keyed by candidate fingerprints.

pub mod builder;
pub mod tier;
pub mod tiered;
pub mod types;

#[cfg(test)]
mod tiered_tests;

pub use builder::CacheBuilder;
pub use tier::CacheTier;
pub use tiered::{
    BuildSummary, Collision, TierHit, TieredCache, TieredCacheHandle, TieredLookupResult,
};
pub use types::{MatchTier, Tier};

//! Labmatch library crate (used by the server and integration tests).
//!
//! Resolves free-text laboratory exam descriptions to catalog master keys
//! through deterministic candidate expansion and a two-tier exact-match cache.
//!
//! # Public API Surface
//!
//! ## Core
//! - [`canonicalize`] - Text canonicalization
//! - [`generate_candidates`] - Ordered candidate expansion
//! - [`Fingerprint`] - BLAKE3 cache keys
//! - [`CacheBuilder`], [`TieredCache`], [`TieredCacheHandle`] - Build and lookup
//! - [`Resolver`], [`ResolutionResult`], [`MatchTier`] - Resolution
//!
//! ## Catalog
//! - [`CatalogRecord`], [`CatalogEntry`], [`load_catalog`] - Validation boundary
//!
//! ## Serving
//! - [`ResolutionPipeline`], [`SemanticFallback`] - MISS handling
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`gateway`] - HTTP surface
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod candidates;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod fallback;
pub mod gateway;
pub mod hashing;
pub mod pipeline;
pub mod resolver;
pub mod text;

pub use cache::{
    BuildSummary, CacheBuilder, Collision, MatchTier, Tier, TieredCache, TieredCacheHandle,
    TieredLookupResult,
};
pub use candidates::generate_candidates;
pub use catalog::{CatalogEntry, CatalogError, CatalogRecord, load_catalog};
pub use config::{Config, ConfigError};
pub use fallback::{FallbackError, HttpSemanticFallback, SemanticFallback};
#[cfg(any(test, feature = "mock"))]
pub use fallback::MockSemanticFallback;
pub use hashing::Fingerprint;
pub use pipeline::{FallbackOutcome, PipelineError, PipelineOutcome, ResolutionPipeline};
pub use resolver::{
    MatchOrigin, ResolutionRequest, ResolutionResult, ResolutionStats, Resolver, resolve,
};
pub use text::canonicalize;

//! Semantic fallback collaborator, consulted only for exams the tiered cache
//! could not resolve.
//!
//! The deterministic engine never depends on it. Whatever key a fallback
//! returns is provisional and is not validated here.

pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::{FallbackError, FallbackResult};
pub use http::HttpSemanticFallback;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSemanticFallback;

use crate::constants::PROVISIONAL_KEY_PREFIX;
use crate::hashing::Fingerprint;

/// External search for a provisional master key.
pub trait SemanticFallback: Send + Sync {
    /// Looks up `text` (the raw, untrimmed input) and returns a master key.
    fn search(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = FallbackResult<String>> + Send;
}

/// Provisional key derived from the raw input, e.g. `MK-NOVA-1a2b3c4d`.
pub fn provisional_key(raw_input: &str) -> String {
    format!(
        "{PROVISIONAL_KEY_PREFIX}{}",
        Fingerprint::of(raw_input).short_hex()
    )
}

//! Content fingerprints used as cache keys.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::SHORT_FINGERPRINT_LEN;
use crate::text::canonicalize;

/// BLAKE3 digest of a candidate string, used as the key of a cache tier.
///
/// The digest covers the exact UTF-8 bytes it is given; callers decide whether
/// those bytes are canonical. [`Fingerprint::of_canonical`] canonicalizes first.
///
/// Two different strings could in principle share a fingerprint. With 256 bits
/// of output this is not a practical concern and is not detected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprints `text` as-is.
    #[inline]
    pub fn of(text: &str) -> Self {
        Self(*blake3::hash(text.as_bytes()).as_bytes())
    }

    /// Fingerprints the canonical form of `text`.
    #[inline]
    pub fn of_canonical(text: &str) -> Self {
        Self::of(&canonicalize(text))
    }

    /// Wraps a precomputed digest.
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full lowercase hex digest (64 chars).
    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }

    /// Leading hex characters of the digest, for log lines and provisional keys.
    pub fn short_hex(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SHORT_FINGERPRINT_LEN);
        hex
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

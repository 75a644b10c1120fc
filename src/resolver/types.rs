use serde::{Deserialize, Serialize};

use crate::cache::MatchTier;
use crate::hashing::Fingerprint;

/// A free-text exam description to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    pub text: String,
    /// Specimen/material as reported upstream. Logged, never matched on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl ResolutionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            material: None,
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }
}

impl From<&str> for ResolutionRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Whether the hit came from the input verbatim or from a derived variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOrigin {
    /// The matched candidate equals the trimmed raw input.
    Original,
    /// Normalized, split, n-gram or heuristic variant.
    Derived,
}

impl MatchOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOrigin::Original => "ORIGINAL",
            MatchOrigin::Derived => "DERIVED",
        }
    }
}

/// Classified outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub master_key: Option<String>,
    pub tier: MatchTier,
    pub matched_candidate: Option<String>,
    pub raw_input: String,
    /// Fingerprint of the raw input bytes, before canonicalization.
    pub raw_fingerprint: Fingerprint,
    /// Position of the matched candidate in the generated list.
    pub candidate_index: Option<usize>,
    pub origin: Option<MatchOrigin>,
}

impl ResolutionResult {
    pub fn miss(raw_input: impl Into<String>) -> Self {
        let raw_input = raw_input.into();
        Self {
            master_key: None,
            tier: MatchTier::Miss,
            matched_candidate: None,
            raw_fingerprint: Fingerprint::of(&raw_input),
            raw_input,
            candidate_index: None,
            origin: None,
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.tier.is_hit()
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// Human-readable decision, e.g. `PRIMARY_HIT (ORIGINAL)` or `MISS`.
    pub fn decision(&self) -> String {
        match self.origin {
            Some(origin) => format!("{} ({})", self.tier, origin.as_str()),
            None => self.tier.to_string(),
        }
    }
}

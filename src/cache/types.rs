use serde::Serialize;

/// Outcome class of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchTier {
    #[serde(rename = "PRIMARY_HIT")]
    Primary,
    #[serde(rename = "SYNONYM_HIT")]
    Synonym,
    #[serde(rename = "MISS")]
    Miss,
}

impl MatchTier {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            MatchTier::Primary => "PRIMARY_HIT",
            MatchTier::Synonym => "SYNONYM_HIT",
            MatchTier::Miss => "MISS",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        !matches!(self, MatchTier::Miss)
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}

/// Which of the two hash mappings a key lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Built from canonical names.
    Primary,
    /// Built from synonym strings.
    Synonym,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::Synonym => "synonym",
        }
    }

    /// The resolution outcome a hit in this tier produces.
    pub fn match_tier(&self) -> MatchTier {
        match self {
            Tier::Primary => MatchTier::Primary,
            Tier::Synonym => MatchTier::Synonym,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

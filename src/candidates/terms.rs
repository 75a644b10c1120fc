//! Fixed vocabularies used by the candidate generator.
//!
//! All entries are in canonical form (ASCII, lowercase). Changing any list
//! changes which fingerprints a catalog produces, so the cache must be rebuilt.

/// Method names, specimen words and prepositions that carry little identity
/// in an exam description. Removed as whole words, longest first.
pub const MODIFIER_TERMS: &[&str] = &[
    "alta sensibilidade",
    "ultra sensivel",
    "ultra-sensivel",
    "automatizado",
    "dosagem",
    "quantificacao",
    "determinacao",
    "analise",
    "confirmacao",
    "h.p.l.c",
    "hplc",
    "quimioluminescencia",
    "eletroquimioluminescencia",
    "imunoturbidimetria",
    "nefelometria",
    "colorimetrico",
    "cinetico",
    "elisa",
    "enzimatico",
    "por",
    "soro",
    "plasma",
    "basal",
    "total",
    "livre",
    "indireta",
    "direta",
    "reverso",
    "fracoes",
    "hormonio",
    "vitamina",
    "de",
    "e",
    "para",
];

/// Tokens never emitted as single-word candidates.
pub const UNIGRAM_STOPWORDS: &[&str] = &["de", "da", "do", "em"];

/// `(trigger, isolated)`: when the canonical text contains `trigger` anywhere,
/// even glued to a prefix, `isolated` is also tried on its own.
pub const COMPOUND_FALLBACKS: &[(&str, &str)] = &[("eletroforese", "eletroforese")];

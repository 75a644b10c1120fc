use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::terms::{COMPOUND_FALLBACKS, MODIFIER_TERMS, UNIGRAM_STOPWORDS};
use crate::text::{canonicalize, collapse_whitespace};

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("parenthetical pattern is valid"));

static TOKEN_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;+/\n\r\s-]+").expect("separator pattern is valid"));

/// Whole-word matcher for one modifier term.
pub(crate) struct ModifierPattern {
    pub(crate) term: &'static str,
    regex: Regex,
}

/// Modifier matchers ordered by descending term length. The sort is stable,
/// so terms of equal length keep their listing order.
pub(crate) static MODIFIER_PATTERNS: LazyLock<Vec<ModifierPattern>> = LazyLock::new(|| {
    let mut terms: Vec<&'static str> = MODIFIER_TERMS.to_vec();
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    terms
        .into_iter()
        .map(|term| ModifierPattern {
            term,
            regex: Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                .expect("escaped modifier term is a valid pattern"),
        })
        .collect()
});

/// Ordered, de-duplicated candidate list under construction.
#[derive(Debug, Default)]
struct CandidateList {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateList {
    fn push(&mut self, candidate: &str) {
        let candidate = candidate.trim();
        if candidate.is_empty() || self.seen.contains(candidate) {
            return;
        }
        self.seen.insert(candidate.to_string());
        self.ordered.push(candidate.to_string());
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Expands a raw exam description into the ordered list of strings tried
/// against the cache.
///
/// Order, first occurrence wins:
/// 1. the trimmed, lowercased input (accents kept)
/// 2. its canonical form
/// 3. for the first `( ... )` group: the group content (lowercased, then
///    canonical) and the input without that group (lowercased, then canonical)
/// 4. the canonical form with modifier terms removed, if any were present
/// 5. when the canonical form splits into several tokens: trigrams, bigrams,
///    then single tokens longer than one character that are not stopwords
/// 6. isolated compound terms found inside the canonical form
///
/// Earlier candidates take precedence at lookup time, so this order is part of
/// the matching contract. Empty or blank input yields no candidates.
///
/// ```
/// use labmatch::candidates::generate_candidates;
///
/// assert_eq!(
///     generate_candidates("TGO (AST)"),
///     vec!["tgo (ast)", "ast", "tgo", "(ast)"],
/// );
/// ```
pub fn generate_candidates(raw: &str) -> Vec<String> {
    let original = raw.trim();
    if original.is_empty() {
        return Vec::new();
    }

    let mut list = CandidateList::default();

    list.push(&original.to_lowercase());

    let canonical = canonicalize(original);
    list.push(&canonical);

    push_parenthetical(&mut list, original);

    if let Some(stripped) = strip_modifiers(&canonical) {
        list.push(&stripped);
    }

    push_ngrams(&mut list, &canonical);

    for (trigger, isolated) in COMPOUND_FALLBACKS {
        if canonical.contains(trigger) {
            list.push(isolated);
        }
    }

    list.into_vec()
}

fn push_parenthetical(list: &mut CandidateList, original: &str) {
    let Some(content) = PARENTHETICAL
        .captures(original)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return;
    };

    list.push(&content.to_lowercase());
    list.push(&canonicalize(content));

    let remainder = original.replace(&format!("({content})"), "");
    let remainder = remainder.trim();
    list.push(&remainder.to_lowercase());
    list.push(&canonicalize(remainder));
}

/// Removes every modifier term from `canonical` as a whole word.
///
/// Returns `None` when no term was present or nothing is left afterwards.
pub(crate) fn strip_modifiers(canonical: &str) -> Option<String> {
    let mut cleaned = canonical.to_string();
    let mut altered = false;

    for pattern in MODIFIER_PATTERNS.iter() {
        if pattern.regex.is_match(&cleaned) {
            cleaned = pattern.regex.replace_all(&cleaned, " ").trim().to_string();
            altered = true;
            trace!(term = pattern.term, "modifier removed");
        }
    }

    if !altered {
        return None;
    }

    let cleaned = collapse_whitespace(&cleaned);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Splits canonical text on `;`, `+`, `/`, `-` and whitespace.
pub(crate) fn tokenize(canonical: &str) -> Vec<&str> {
    TOKEN_SEPARATORS
        .split(canonical)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

fn push_ngrams(list: &mut CandidateList, canonical: &str) {
    let tokens = tokenize(canonical);
    if tokens.len() <= 1 {
        return;
    }

    for n in [3, 2] {
        for window in tokens.windows(n) {
            list.push(&window.join(" "));
        }
    }

    for token in &tokens {
        if token.len() > 1 && !UNIGRAM_STOPWORDS.contains(token) {
            list.push(token);
        }
    }
}

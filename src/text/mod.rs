//! Text canonicalization shared by catalog build and request resolution.
//!
//! Every string that is fingerprinted on either side of the cache goes through
//! [`canonicalize`] (directly or via the candidate generator). Keeping a single
//! implementation is what makes build-time and query-time keys agree.

use unicode_normalization::UnicodeNormalization;

/// Canonical form of `text`: line breaks and tabs become spaces, diacritics are
/// folded away (NFKD, non-ASCII dropped), the result is lowercased, whitespace
/// runs collapse to one space and the ends are trimmed.
///
/// Never fails; empty input yields an empty string. The function is idempotent.
///
/// ```
/// use labmatch::text::canonicalize;
///
/// assert_eq!(canonicalize("  Uréia\n(Sérica)\t "), "ureia (serica)");
/// assert_eq!(canonicalize(""), "");
/// ```
pub fn canonicalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced = replace_line_breaks(text);

    let folded: String = spaced
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    collapse_whitespace(&folded)
}

/// Collapses every run of whitespace into a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn replace_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if matches!(c, '\n' | '\r' | '\t') {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

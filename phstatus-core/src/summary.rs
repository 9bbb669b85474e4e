//! Summary normalization and matching.
//!
//! Holiday feeds often spell the same holiday differently from one day to
//! the next ("Lunar New Year", "Lunar New Year Holiday", "Second Day of
//! Lunar New Year"). These helpers decide which labels denote the same
//! logical holiday.

/// Suffixes removed by [`normalize_summary`], in the order they are tried.
/// Each one must be preceded by whitespace and is removed at most once.
const SUFFIXES: &[&str] = &["holiday", "day", "(regional holiday)"];

/// Canonicalize a summary for comparison.
///
/// Lowercases and trims, then strips one trailing occurrence of each of
/// `" holiday"`, `" day"` and `" (regional holiday)"` in turn, together with
/// the whitespace before it. Internal words are left alone.
pub fn normalize_summary(summary: &str) -> String {
    let lowered = summary.to_lowercase();
    let mut s = lowered.trim();

    for suffix in SUFFIXES {
        s = strip_word_suffix(s, suffix);
    }

    s.trim().to_string()
}

/// Remove `suffix` from the end of `s` when it is a separate word.
fn strip_word_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    match s.strip_suffix(suffix) {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end(),
        _ => s,
    }
}

/// Whether two summaries denote the same holiday: after normalization, one
/// must be a substring of the other.
///
/// The relation is symmetric but not transitive, so grouping built on it
/// depends on input order.
pub fn is_same_summary(a: &str, b: &str) -> bool {
    let a = normalize_summary(a);
    let b = normalize_summary(b);
    a.contains(&b) || b.contains(&a)
}

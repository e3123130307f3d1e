//! Join-phrase normalization for artist credits
//!
//! Rewrites informal feature markers ("ft", "ft.", "featuring", "with") to
//! the canonical "feat." so that downstream splitting only has to look for
//! one token.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Variants of ft/feat/featuring between artist names. Requires
    // surrounding whitespace so a band literally named "Ft. Someone"
    // (token at the start of the credit) is never rewritten.
    static ref FT_JOIN_PATTERN: Regex = Regex::new(
        r"(?i)\s+f(?:ea)?t(?:\.|uring)?\s+"
    ).unwrap();

    // "with" as a join word; qualified further before rewriting
    static ref WITH_JOIN_PATTERN: Regex = Regex::new(
        r"(?i)\s+with\s+"
    ).unwrap();
}

/// Rewrite every informal feature marker in a credit to " feat. "
///
/// "with" only counts as a marker when it follows a non-empty lead segment
/// and sits outside parentheses, brackets, and double quotes, so titles
/// like "An Evening (Live with Orchestra)" embedded in a credit survive.
/// Unrecognized input passes through unchanged.
pub fn normalize_join_phrases(credit: &str) -> String {
    let pass = FT_JOIN_PATTERN.replace_all(credit, " feat. ");
    rewrite_with_markers(&pass)
}

/// Replace qualifying " with " occurrences by " feat. "
fn rewrite_with_markers(credit: &str) -> String {
    let mut out = String::with_capacity(credit.len());
    let mut last_end = 0;

    for mat in WITH_JOIN_PATTERN.find_iter(credit) {
        let prefix = &credit[..mat.start()];
        if prefix.trim().is_empty() {
            continue;
        }
        if !is_top_level(credit, mat.start()) {
            continue;
        }
        out.push_str(&credit[last_end..mat.start()]);
        out.push_str(" feat. ");
        last_end = mat.end();
    }

    out.push_str(&credit[last_end..]);
    out
}

/// Check whether a byte position sits outside any wrapper or quoted span
fn is_top_level(s: &str, pos: usize) -> bool {
    let mut depth: i32 = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        if i >= pos {
            break;
        }
        match c {
            '"' => in_quotes = !in_quotes,
            '(' | '[' | '{' if !in_quotes => depth += 1,
            ')' | ']' | '}' if !in_quotes => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ft_variants() {
        assert_eq!(
            normalize_join_phrases("Artist A ft. Artist B"),
            "Artist A feat. Artist B"
        );
        assert_eq!(
            normalize_join_phrases("Artist A ft Artist B"),
            "Artist A feat. Artist B"
        );
        assert_eq!(
            normalize_join_phrases("Artist A Featuring Artist B"),
            "Artist A feat. Artist B"
        );
        assert_eq!(
            normalize_join_phrases("Artist A feat Artist B"),
            "Artist A feat. Artist B"
        );
    }

    #[test]
    fn test_already_canonical() {
        assert_eq!(
            normalize_join_phrases("Artist A feat. Artist B"),
            "Artist A feat. Artist B"
        );
    }

    #[test]
    fn test_with_as_marker() {
        assert_eq!(
            normalize_join_phrases("Artist A with Artist B"),
            "Artist A feat. Artist B"
        );
    }

    #[test]
    fn test_with_inside_parens_untouched() {
        assert_eq!(
            normalize_join_phrases("Artist A (Live with Orchestra)"),
            "Artist A (Live with Orchestra)"
        );
    }

    #[test]
    fn test_with_inside_quotes_untouched() {
        assert_eq!(
            normalize_join_phrases("\"Man with a Plan\" feat. Artist B"),
            "\"Man with a Plan\" feat. Artist B"
        );
    }

    #[test]
    fn test_leading_ft_band_name_untouched() {
        // token at the very start has no lead segment before it
        assert_eq!(normalize_join_phrases("Ft. Someone"), "Ft. Someone");
        assert_eq!(normalize_join_phrases("With Confidence"), "With Confidence");
    }

    #[test]
    fn test_token_inside_word_untouched() {
        assert_eq!(normalize_join_phrases("Daft Punk"), "Daft Punk");
        assert_eq!(normalize_join_phrases("Swift Company"), "Swift Company");
    }

    #[test]
    fn test_no_marker_passthrough() {
        assert_eq!(normalize_join_phrases("Artist A"), "Artist A");
        assert_eq!(normalize_join_phrases(""), "");
    }
}

//! Credit splitting and guest-list normalization
//!
//! Splits a credit at the first canonical "feat." marker into a lead artist
//! and an ordered guest list, and deduplicates guest names.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::models::ParsedCredit;

lazy_static! {
    // First canonical feature marker in a credit
    static ref FEAT_MARKER_PATTERN: Regex = Regex::new(
        r"(?i)\bfeat\.\s*"
    ).unwrap();

    // Guest-name separators, in precedence order. A bare '/' is NOT a
    // separator; only ' / ' with whitespace on both sides splits, which
    // keeps names like "AC/DC" intact.
    static ref GUEST_SEP_PATTERN: Regex = Regex::new(
        r"(?i)\s*;\s*|\s*&\s*|\s*\+\s*|\s+and\s+|\s+/\s+|\s*,\s*"
    ).unwrap();
}

/// Split a credit at the first "feat." marker
///
/// Everything before the marker becomes the lead (trimmed, outer wrappers
/// stripped); everything after is split into guest names. Without a marker
/// the whole trimmed input is the lead and the guest list is empty. Total
/// for any input string.
pub fn split_credit(credit: &str) -> ParsedCredit {
    match FEAT_MARKER_PATTERN.find(credit) {
        Some(mat) => {
            let lead = strip_wrappers(&credit[..mat.start()]);
            let tail = strip_wrappers(&credit[mat.end()..]);
            ParsedCredit {
                lead,
                guests: split_guests(&tail),
            }
        }
        None => ParsedCredit {
            lead: credit.trim().to_string(),
            guests: Vec::new(),
        },
    }
}

/// Split a guest tail into individual names
pub fn split_guests(tail: &str) -> Vec<String> {
    if tail.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut last_end = 0;

    for mat in GUEST_SEP_PATTERN.find_iter(tail) {
        push_segment(&mut result, &tail[last_end..mat.start()]);
        last_end = mat.end();
    }
    push_segment(&mut result, &tail[last_end..]);

    result
}

fn push_segment(result: &mut Vec<String>, segment: &str) {
    let cleaned = strip_wrappers(segment);
    if !cleaned.is_empty() {
        result.push(cleaned);
    }
}

/// Trim balanced outer wrappers and whitespace
///
/// Removes one or more layers of matching (), [], {} around the entire
/// string. Inner punctuation and dashes are left alone so legitimate
/// artist names are not altered.
pub fn strip_wrappers(s: &str) -> String {
    let mut t = s.trim();

    while let Some(inner) = strip_one_layer(t) {
        t = inner.trim();
    }

    t.to_string()
}

/// Strip a single outer wrapper layer if the opening wrapper is closed by
/// the final character
fn strip_one_layer(t: &str) -> Option<&str> {
    for (left, right) in [('(', ')'), ('[', ']'), ('{', '}')] {
        if !(t.len() >= 2 && t.starts_with(left) && t.ends_with(right)) {
            continue;
        }

        let last = t.len() - right.len_utf8();
        let mut depth: i32 = 0;
        for (i, c) in t.char_indices() {
            if c == left {
                depth += 1;
            } else if c == right {
                depth -= 1;
                if depth == 0 && i != last {
                    // outer wrapper closes early, e.g. "(A) (B)"
                    return None;
                }
            }
        }

        return Some(&t[left.len_utf8()..last]);
    }

    None
}

/// Remove case-insensitive duplicate guest names, first occurrence wins
pub fn dedup_guests<I>(guests: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for guest in guests {
        if seen.insert(guest.to_lowercase()) {
            ordered.push(guest);
        }
    }

    ordered
}

/// Join guest names with the canonical "; " separator
pub fn join_guests(guests: &[String]) -> String {
    guests.join("; ")
}

//! Canonical "(feat. …)" suffix handling for titles and album names
//!
//! Detection and composition are paired so that running them back to back
//! over an already-suffixed string reproduces it byte for byte.

use lazy_static::lazy_static;
use regex::Regex;

use super::split::{join_guests, split_guests};

lazy_static! {
    // Trailing canonical suffix; the capture holds the guest content
    static ref FEAT_SUFFIX_PATTERN: Regex = Regex::new(
        r"(?i)\(\s*feat\.\s+(.+)\)\s*$"
    ).unwrap();
}

/// A detected trailing "(feat. …)" suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSuffix {
    /// Title with the suffix removed and trailing whitespace trimmed
    pub base: String,
    /// Guest names extracted from the suffix content
    pub guests: Vec<String>,
}

/// Detect a trailing "(feat. …)" suffix on a title or album string
pub fn detect_suffix(title: &str) -> Option<DetectedSuffix> {
    let caps = FEAT_SUFFIX_PATTERN.captures(title)?;
    let mat = caps.get(0)?;
    let content = caps.get(1)?.as_str();

    Some(DetectedSuffix {
        base: title[..mat.start()].trim_end().to_string(),
        guests: split_guests(content),
    })
}

/// Check whether a title already carries a "(feat. …)" suffix
pub fn has_suffix(title: &str) -> bool {
    FEAT_SUFFIX_PATTERN.is_match(title)
}

/// Append the canonical suffix for a guest list to a base title
///
/// An empty guest list returns the base unchanged.
pub fn compose_suffix(base: &str, guests: &[String]) -> String {
    if guests.is_empty() {
        base.to_string()
    } else {
        format!("{} (feat. {})", base, join_guests(guests))
    }
}

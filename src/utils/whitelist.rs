//! Whitelist of artist credits exempt from transformation

/// Exact credit strings that must never be rewritten
///
/// Entries are compared without case folding or trimming of the candidate
/// so that configuration authors stay in control; they are expected to
/// list exact credits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    entries: Vec<String>,
}

impl Whitelist {
    /// Parse a configured whitelist string
    ///
    /// Entries are separated by newlines, commas, or semicolons; each entry
    /// is trimmed and empty entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .split(&['\n', ',', ';'][..])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-match check against a single candidate string
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|entry| entry == candidate)
    }

    /// Check the raw credit and its parsed lead against the whitelist
    ///
    /// A match on either means the caller must leave the fields untouched.
    pub fn matches(&self, raw_credit: &str, lead: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.contains(raw_credit) || (!lead.is_empty() && self.contains(lead))
    }
}

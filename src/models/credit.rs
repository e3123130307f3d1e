//! Credit model and credit sources

use crate::utils::joins::normalize_join_phrases;
use crate::utils::split::split_credit;

/// Result of splitting an artist credit
///
/// Guests are the raw split segments in credit order; deduplication happens
/// when the guest list is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCredit {
    /// Primary, non-featured artist
    pub lead: String,
    /// Featured artists, in credit order
    pub guests: Vec<String>,
}

/// Source of an artist credit for the appliers
///
/// The regex-based split over the raw field value is the fallback; hosts
/// that already carry split lead/guest lists provide them through
/// [`PreSplitCredit`], which takes priority over re-parsing the string.
pub trait CreditSource {
    /// Raw credit string as it appears in the field
    fn raw(&self) -> &str;

    /// Lead artist and guest list for this credit
    fn parse(&self) -> ParsedCredit;
}

/// Credit backed only by the raw field value
///
/// Parsing normalizes join phrases and then splits at the first "feat."
/// marker.
#[derive(Debug, Clone, Copy)]
pub struct RawCredit<'a> {
    credit: &'a str,
}

impl<'a> RawCredit<'a> {
    pub fn new(credit: &'a str) -> Self {
        Self { credit }
    }
}

impl CreditSource for RawCredit<'_> {
    fn raw(&self) -> &str {
        self.credit
    }

    fn parse(&self) -> ParsedCredit {
        split_credit(&normalize_join_phrases(self.credit))
    }
}

/// Credit with lead and guests already split by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreSplitCredit {
    raw: String,
    lead: String,
    guests: Vec<String>,
}

impl PreSplitCredit {
    pub fn new(
        raw: impl Into<String>,
        lead: impl Into<String>,
        guests: Vec<String>,
    ) -> Self {
        Self {
            raw: raw.into(),
            lead: lead.into(),
            guests,
        }
    }
}

impl CreditSource for PreSplitCredit {
    fn raw(&self) -> &str {
        &self.raw
    }

    fn parse(&self) -> ParsedCredit {
        ParsedCredit {
            lead: self.lead.clone(),
            guests: self.guests.clone(),
        }
    }
}

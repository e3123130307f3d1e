//! Data models for credit normalization

mod album;
mod credit;
mod track;

pub use album::AlbumFields;
pub use credit::{CreditSource, ParsedCredit, PreSplitCredit, RawCredit};
pub use track::TrackFields;

//! featnorm — normalize featured-artist credits in music metadata
//!
//! Featured-artist attributions arrive in many informal shapes mixed into
//! the artist field ("A feat. B", "A ft. B & C", "A with B"). This crate
//! rewrites them into one canonical form: the lead artist stays in the
//! artist field and the guests move into a single "(feat. X; Y)" suffix on
//! the title, at the track level and at the album level, without ever
//! applying the transformation twice.
//!
//! The host owns the metadata objects and the lifecycle hooks; this crate
//! only rewrites the in-memory field sets it is handed.
//!
//! ```
//! use featnorm::{apply_track, FeatOptions, TrackFields};
//!
//! let mut fields = TrackFields {
//!     artist: "Artist A feat. Artist B & Artist C".to_string(),
//!     title: "Song Name".to_string(),
//!     ..Default::default()
//! };
//!
//! apply_track(&mut fields, &FeatOptions::default());
//! assert_eq!(fields.artist, "Artist A");
//! assert_eq!(fields.title, "Song Name (feat. Artist B; Artist C)");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use config::{FeatConfig, FeatOptions};
pub use self::core::{
    apply_album, apply_album_from, apply_track, apply_track_from, Outcome, SkipReason,
};
pub use models::{AlbumFields, CreditSource, ParsedCredit, PreSplitCredit, RawCredit, TrackFields};
pub use utils::whitelist::Whitelist;

//! Track field set

use serde::{Deserialize, Serialize};

/// The track-level fields rewritten by the applier
///
/// Owned by the host's metadata object; borrowed mutably for the duration
/// of one track-processing call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackFields {
    /// Artist credit, e.g. "Artist A feat. Artist B"
    #[serde(default)]
    pub artist: String,
    /// Sort form of the artist credit
    #[serde(default)]
    pub artistsort: String,
    /// Track title
    #[serde(default)]
    pub title: String,
    /// Multivalue FEATURED_ARTISTS tag; written only when configured
    #[serde(default)]
    pub featured_artists: Vec<String>,
}

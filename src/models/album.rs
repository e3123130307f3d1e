//! Album field set

use serde::{Deserialize, Serialize};

/// The release-level fields rewritten by the applier
///
/// Same ownership model as the track fields: borrowed from the host for
/// one release-processing call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumFields {
    /// Album artist credit
    #[serde(default)]
    pub albumartist: String,
    /// Sort form of the album artist credit
    #[serde(default)]
    pub albumartistsort: String,
    /// Album title
    #[serde(default)]
    pub album: String,
    /// Multivalue FEATURED_ARTISTS tag; written only when configured
    #[serde(default)]
    pub featured_artists: Vec<String>,
}

//! Configuration for featured-artist normalization
//!
//! Settings are persisted as JSON and compiled once per processing pass
//! into an immutable [`FeatOptions`] value that is passed explicitly into
//! every applier call; the appliers never read ambient global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::whitelist::Whitelist;

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatConfig {
    /// Whitelist of exact artist credits to skip, separated by newlines,
    /// commas, or semicolons
    #[serde(default)]
    pub featured_artists_whitelist: String,

    /// Write the normalized guest list as a FEATURED_ARTISTS multivalue tag
    #[serde(default)]
    pub add_featured_artists_tag: bool,

    /// Album-artist sentinel that disables album-level processing
    #[serde(default = "default_various_artists")]
    pub various_artists: String,
}

impl Default for FeatConfig {
    fn default() -> Self {
        Self {
            featured_artists_whitelist: String::new(),
            add_featured_artists_tag: false,
            various_artists: default_various_artists(),
        }
    }
}

impl FeatConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file yields the defaults, which are written back so the
    /// host ends up with a settings file it can edit.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content =
                std::fs::read_to_string(path).context("Failed to read settings file")?;
            let config: FeatConfig =
                serde_json::from_str(&content).context("Failed to parse settings file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Compile the per-pass options
    pub fn compile(&self) -> FeatOptions {
        FeatOptions {
            whitelist: Whitelist::parse(&self.featured_artists_whitelist),
            add_featured_artists_tag: self.add_featured_artists_tag,
            various_artists: self.various_artists.clone(),
        }
    }
}

/// Immutable options for one processing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatOptions {
    /// Parsed whitelist of exact credits
    pub whitelist: Whitelist,
    /// Write the FEATURED_ARTISTS multivalue tag
    pub add_featured_artists_tag: bool,
    /// Album-artist sentinel, compared case-insensitively
    pub various_artists: String,
}

impl Default for FeatOptions {
    fn default() -> Self {
        FeatConfig::default().compile()
    }
}

fn default_various_artists() -> String {
    "Various Artists".to_string()
}

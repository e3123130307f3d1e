//! Core appliers

pub mod apply;

pub use apply::{apply_album, apply_album_from, apply_track, apply_track_from, Outcome, SkipReason};

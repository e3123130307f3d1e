//! Track-level and album-level credit appliers
//!
//! The appliers are the only components that touch host field sets. Each
//! call either rewrites the fields of the single entity passed in or is a
//! no-op with a logged skip reason.

use tracing::debug;

use crate::config::FeatOptions;
use crate::models::{AlbumFields, CreditSource, RawCredit, TrackFields};
use crate::utils::joins::normalize_join_phrases;
use crate::utils::split::{dedup_guests, split_credit};
use crate::utils::suffix::{compose_suffix, detect_suffix};

/// Why an applier call left the fields untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The credit or its lead artist is whitelisted
    Whitelisted,
    /// No feature marker, or an empty guest list after splitting
    NoGuests,
    /// Album-level credit led by the various-artists sentinel
    VariousArtists,
}

/// Result of one applier call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fields were rewritten
    Updated,
    /// Fields were left untouched
    Skipped(SkipReason),
}

/// Rewrite a track's artist/title fields from its raw artist credit
pub fn apply_track(fields: &mut TrackFields, opts: &FeatOptions) -> Outcome {
    let credit = fields.artist.clone();
    apply_track_from(fields, &RawCredit::new(&credit), opts)
}

/// Rewrite a track's artist/title fields from an explicit credit source
///
/// Hosts that carry pre-split lead/guest lists pass a
/// [`PreSplitCredit`](crate::models::PreSplitCredit) here instead of
/// falling back to the regex split.
pub fn apply_track_from(
    fields: &mut TrackFields,
    source: &dyn CreditSource,
    opts: &FeatOptions,
) -> Outcome {
    let raw = source.raw();
    let parsed = source.parse();

    if opts.whitelist.matches(raw, &parsed.lead) {
        debug!("skipping artist {:?}: whitelisted", raw);
        return Outcome::Skipped(SkipReason::Whitelisted);
    }

    let guests = dedup_guests(parsed.guests);
    if guests.is_empty() {
        debug!("skipping artist {:?}: no featured artists", raw);
        return Outcome::Skipped(SkipReason::NoGuests);
    }

    fields.artist = parsed.lead;
    reduce_sort_field(&mut fields.artistsort);
    let guests = retitle(&mut fields.title, guests);

    debug!(
        "moved featured artists {:?} into title {:?}",
        guests, fields.title
    );

    if opts.add_featured_artists_tag {
        fields.featured_artists = guests;
    }

    Outcome::Updated
}

/// Rewrite a release's album-artist/album fields from its raw credit
pub fn apply_album(fields: &mut AlbumFields, opts: &FeatOptions) -> Outcome {
    let credit = fields.albumartist.clone();
    apply_album_from(fields, &RawCredit::new(&credit), opts)
}

/// Rewrite a release's album-artist/album fields from an explicit credit
/// source
///
/// Identical to the track applier, with one extra guard: a lead artist
/// matching the various-artists sentinel disables the transformation for
/// the whole release.
pub fn apply_album_from(
    fields: &mut AlbumFields,
    source: &dyn CreditSource,
    opts: &FeatOptions,
) -> Outcome {
    let raw = source.raw();
    let parsed = source.parse();

    if opts.whitelist.matches(raw, &parsed.lead) {
        debug!("skipping albumartist {:?}: whitelisted", raw);
        return Outcome::Skipped(SkipReason::Whitelisted);
    }

    if !opts.various_artists.is_empty()
        && parsed.lead.to_lowercase() == opts.various_artists.to_lowercase()
    {
        debug!("skipping albumartist {:?}: various artists", raw);
        return Outcome::Skipped(SkipReason::VariousArtists);
    }

    let guests = dedup_guests(parsed.guests);
    if guests.is_empty() {
        debug!("skipping albumartist {:?}: no featured artists", raw);
        return Outcome::Skipped(SkipReason::NoGuests);
    }

    fields.albumartist = parsed.lead;
    reduce_sort_field(&mut fields.albumartistsort);
    let guests = retitle(&mut fields.album, guests);

    debug!(
        "moved featured artists {:?} into album title {:?}",
        guests, fields.album
    );

    if opts.add_featured_artists_tag {
        fields.featured_artists = guests;
    }

    Outcome::Updated
}

/// Reduce a sort field to its own lead artist
///
/// No external sort-name transform exists, so the lead's text is the sort
/// form. Empty fields stay empty.
fn reduce_sort_field(sort: &mut String) {
    if !sort.is_empty() {
        *sort = split_credit(&normalize_join_phrases(sort)).lead;
    }
}

/// Union new guests into a title's suffix and rewrite it in place
///
/// Any guests already present in a trailing "(feat. …)" suffix come first;
/// recomposing with no new guests reproduces the title byte for byte. An
/// empty title is left untouched. Returns the unioned guest list.
fn retitle(title: &mut String, guests: Vec<String>) -> Vec<String> {
    if title.is_empty() {
        return guests;
    }

    let (base, existing) = match detect_suffix(title) {
        Some(detected) => (detected.base, detected.guests),
        None => (title.clone(), Vec::new()),
    };

    let unioned = dedup_guests(existing.into_iter().chain(guests));
    *title = compose_suffix(&base, &unioned);
    unioned
}

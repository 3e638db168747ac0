//! Searchable, sortable track listing.
//!
//! Listings borrow from the catalog; the tracks themselves are never copied
//! or modified.

use crate::parser::Track;
use clap::ValueEnum;
use log::debug;
use std::cmp::Ordering;

/// Column a listing is sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TrackSortKey {
    #[default]
    Name,
    Popularity,
    Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Keep tracks matching a search query
///
/// **Public** - search box of the track table
///
/// Case-insensitive substring match on the track name, any credited artist
/// name, or the album name. A blank query keeps every track, in catalog order.
pub fn filter_tracks<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let needle = query.trim().to_lowercase();

    let matches: Vec<&Track> = tracks
        .iter()
        .filter(|track| needle.is_empty() || track_matches(track, &needle))
        .collect();

    debug!("Query {:?} matched {} of {} tracks", query, matches.len(), tracks.len());

    matches
}

/// Sort a listing in place
///
/// **Public** - sortable columns of the track table
///
/// Stable: tracks comparing equal keep their current relative order in both
/// directions. Names compare case-insensitively.
pub fn sort_tracks(tracks: &mut [&Track], key: TrackSortKey, order: SortOrder) {
    tracks.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn track_matches(track: &Track, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&track.name)
        || track.artists.iter().any(|artist| contains(&artist.name))
        || track.album.as_ref().is_some_and(|album| contains(&album.name))
}

fn compare_by(a: &Track, b: &Track, key: TrackSortKey) -> Ordering {
    match key {
        TrackSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        TrackSortKey::Popularity => a.popularity.cmp(&b.popularity),
        TrackSortKey::Duration => a.duration_ms.cmp(&b.duration_ms),
    }
}

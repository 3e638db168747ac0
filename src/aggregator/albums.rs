//! Album rollups for the popular albums gallery.

use crate::parser::{AlbumSummary, Track};
use crate::utils::config::TOP_ALBUMS_LIMIT;
use log::debug;
use std::collections::HashMap;

/// Roll tracks up into per-album summaries
///
/// **Public** - main entry point for the albums gallery
///
/// # Algorithm
/// 1. Skip tracks without an album id
/// 2. Seed a summary from the first track seen for each album id
/// 3. Count tracks and collect distinct artist names per album
/// 4. Sort by album popularity (descending, stable) and keep the top entries
pub fn summarize_albums(tracks: &[Track]) -> Vec<AlbumSummary> {
    // album id -> index into summaries
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<AlbumSummary> = Vec::new();

    for track in tracks {
        let (Some(album), Some(album_id)) = (track.album.as_ref(), track.album_id()) else {
            continue;
        };

        let slot = *slots.entry(album_id).or_insert_with(|| {
            summaries.push(AlbumSummary {
                id: album_id.to_string(),
                name: album.name.clone(),
                images: album.images.clone().unwrap_or_default(),
                release_date: album.release_date.clone(),
                popularity: album.popularity.unwrap_or(0),
                track_count: 0,
                artist_names: Vec::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.track_count += 1;

        for artist in &track.artists {
            if !summary.artist_names.contains(&artist.name) {
                summary.artist_names.push(artist.name.clone());
            }
        }
    }

    debug!("Rolled up {} distinct albums", summaries.len());

    summaries.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    summaries.truncate(TOP_ALBUMS_LIMIT);
    summaries
}

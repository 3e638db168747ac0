//! Catalog statistics and chart shares.
//!
//! Shares are whole percentages of the displayed total, the way the genre
//! chart labels its slices.

use crate::parser::{CatalogStats, GenreShare, RankedCount, Track};
use log::debug;
use std::collections::HashSet;

/// Calculate genre shares from a ranked genre list
///
/// **Public** - main entry point for share calculation
///
/// # Arguments
/// * `ranked` - Output of `rank_genres` (long tail already collapsed)
///
/// # Returns
/// One share per entry, same order
pub fn calculate_genre_shares(ranked: &[RankedCount]) -> Vec<GenreShare> {
    let total: u64 = ranked.iter().map(|entry| entry.count).sum();

    debug!("Calculating shares for {} genres over {} counts", ranked.len(), total);

    ranked
        .iter()
        .map(|entry| create_genre_share(entry, total))
        .collect()
}

/// Create a GenreShare from a RankedCount
///
/// **Public** - single-entry conversion
pub fn create_genre_share(entry: &RankedCount, total: u64) -> GenreShare {
    let percentage = if total > 0 {
        ((entry.count as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    GenreShare {
        label: entry.label.clone(),
        count: entry.count,
        percentage,
    }
}

/// Calculate catalog-wide statistics
///
/// **Public** - provides summary counters for the report header
pub fn calculate_catalog_stats(tracks: &[Track]) -> CatalogStats {
    if tracks.is_empty() {
        return CatalogStats::default();
    }

    let artists: HashSet<&str> = tracks
        .iter()
        .flat_map(|track| &track.artists)
        .map(|artist| artist.name.as_str())
        .collect();

    let albums: HashSet<&str> = tracks.iter().filter_map(Track::album_id).collect();

    let popularity_sum: u64 = tracks.iter().map(|track| u64::from(track.popularity)).sum();
    let track_count = tracks.len() as u64;

    CatalogStats {
        track_count,
        artist_count: artists.len() as u64,
        album_count: albums.len() as u64,
        total_duration_ms: tracks.iter().map(|track| track.duration_ms).sum(),
        explicit_count: tracks.iter().filter(|track| track.explicit).count() as u64,
        mean_popularity: (popularity_sum / track_count) as u32,
    }
}

impl CatalogStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Tracks: {} | Artists: {} | Albums: {} | Explicit: {} | Mean popularity: {}",
            self.track_count,
            self.artist_count,
            self.album_count,
            self.explicit_count,
            self.mean_popularity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calculate_genre_shares() {
        let ranked = vec![
            RankedCount::new("rock", 2),
            RankedCount::new("pop", 1),
        ];

        let shares = calculate_genre_shares(&ranked);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].percentage, 67);
        assert_eq!(shares[1].percentage, 33);
    }

    #[test]
    fn test_create_genre_share_zero_total() {
        let share = create_genre_share(&RankedCount::new("rock", 0), 0);
        assert_eq!(share.percentage, 0);
    }

    #[test]
    fn test_catalog_stats_empty() {
        let stats = calculate_catalog_stats(&[]);
        assert_eq!(stats, CatalogStats::default());
    }

    #[test]
    fn test_calculate_catalog_stats() {
        let tracks: Vec<Track> = serde_json::from_value(json!([
            {
                "id": "1", "name": "One", "duration_ms": 1000, "popularity": 50,
                "explicit": true,
                "artists": [{ "name": "X" }, { "name": "Y" }],
                "album": { "id": "A1", "name": "A" }
            },
            {
                "id": "2", "name": "Two", "duration_ms": 2000, "popularity": 25,
                "artists": [{ "name": "X" }],
                "album": { "name": "No id" }
            }
        ]))
        .unwrap();

        let stats = calculate_catalog_stats(&tracks);

        assert_eq!(stats.track_count, 2);
        assert_eq!(stats.artist_count, 2);
        assert_eq!(stats.album_count, 1);
        assert_eq!(stats.total_duration_ms, 3000);
        assert_eq!(stats.explicit_count, 1);
        assert_eq!(stats.mean_popularity, 37);
        assert!(stats.summary().contains("Tracks: 2"));
    }
}

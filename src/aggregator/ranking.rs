//! Artist and genre frequency rankings.
//!
//! Counts are kept in first-appearance order and sorted with a stable sort,
//! so equal counts rank in the order their label was first met.

use crate::parser::{RankedCount, Track};
use crate::utils::config::{
    GENRE_COLLAPSE_THRESHOLD, OTHER_GENRES_LABEL, TOP_ARTISTS_LIMIT, TOP_GENRES_KEPT,
};
use log::debug;
use std::collections::HashMap;

/// Insertion-ordered label counter
#[derive(Debug, Default)]
struct LabelCounter<'a> {
    slots: HashMap<&'a str, usize>,
    counts: Vec<(&'a str, u64)>,
}

impl<'a> LabelCounter<'a> {
    fn increment(&mut self, label: &'a str) {
        match self.slots.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(label, self.counts.len());
                self.counts.push((label, 1));
            }
        }
    }

    fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Ranked by count, descending. Ties keep first-appearance order.
    fn into_ranked(self) -> Vec<RankedCount> {
        let mut ranked: Vec<RankedCount> = self
            .counts
            .into_iter()
            .map(|(label, count)| RankedCount::new(label, count))
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}

/// Rank artists by the number of tracks crediting them
///
/// **Public** - feeds the top artists chart
///
/// Every artist credit on every track counts once, keyed by artist name.
/// Returns at most [`TOP_ARTISTS_LIMIT`] entries.
pub fn rank_artists(tracks: &[Track]) -> Vec<RankedCount> {
    let mut counter = LabelCounter::default();

    for artist in tracks.iter().flat_map(|track| &track.artists) {
        counter.increment(&artist.name);
    }

    debug!("Counted {} distinct artists", counter.distinct());

    let mut ranked = counter.into_ranked();
    ranked.truncate(TOP_ARTISTS_LIMIT);
    ranked
}

/// Rank genres across the catalog
///
/// **Public** - feeds the genre distribution chart
///
/// # Algorithm
/// 1. Per track, count the album genres when the album lists any
/// 2. Otherwise count the genres of every credited artist
/// 3. Sort by count (stable)
/// 4. Collapse the long tail into [`OTHER_GENRES_LABEL`]
pub fn rank_genres(tracks: &[Track]) -> Vec<RankedCount> {
    let mut counter = LabelCounter::default();

    for track in tracks {
        match track.album_genres() {
            Some(genres) => genres.iter().for_each(|genre| counter.increment(genre)),
            None => track
                .artists
                .iter()
                .flat_map(|artist| artist.genres())
                .for_each(|genre| counter.increment(genre)),
        }
    }

    debug!("Counted {} distinct genres", counter.distinct());

    collapse_long_tail(counter.into_ranked())
}

/// Fold genres past the cutoff into a single "other" entry
///
/// **Public** - applied by `rank_genres`, usable on any ranked list
///
/// Only lists longer than [`GENRE_COLLAPSE_THRESHOLD`] are collapsed. The
/// first [`TOP_GENRES_KEPT`] entries are kept and the rest summed. A kept
/// genre already named [`OTHER_GENRES_LABEL`] absorbs the sum so labels stay
/// unique.
pub fn collapse_long_tail(mut ranked: Vec<RankedCount>) -> Vec<RankedCount> {
    if ranked.len() <= GENRE_COLLAPSE_THRESHOLD {
        return ranked;
    }

    let other_count: u64 = ranked
        .drain(TOP_GENRES_KEPT..)
        .map(|entry| entry.count)
        .sum();

    // Unreachable with positive counts, kept so an empty tail never shows up
    if other_count > 0 {
        match ranked.iter().position(|entry| entry.label == OTHER_GENRES_LABEL) {
            Some(slot) => {
                ranked[slot].count += other_count;
                ranked.sort_by(|a, b| b.count.cmp(&a.count));
            }
            None => ranked.push(RankedCount::new(OTHER_GENRES_LABEL, other_count)),
        }
    }

    debug!("Collapsed genre tail into {} ({})", OTHER_GENRES_LABEL, other_count);

    ranked
}

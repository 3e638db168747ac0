//! Output JSON schema definitions for chart reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

use super::track::Image;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Catalog document the report was built from
    pub source: String,

    /// Whole-catalog counters
    pub stats: CatalogStats,

    /// Most credited artists
    pub top_artists: Vec<RankedCount>,

    /// Genre distribution, long tail collapsed
    pub genres: Vec<GenreShare>,

    /// Most popular albums with their rollups
    pub popular_albums: Vec<AlbumSummary>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// A label with the number of times it was counted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCount {
    pub label: String,
    pub count: u64,
}

impl RankedCount {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A ranked genre with its share of the displayed total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreShare {
    pub label: String,
    pub count: u64,

    /// Whole percentage of the displayed total
    pub percentage: u32,
}

/// Album rollup for the popular albums gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    pub popularity: u32,

    /// Tracks in the catalog that belong to this album
    #[serde(rename = "trackCount")]
    pub track_count: u64,

    /// Distinct artist names across those tracks, first-seen order
    #[serde(rename = "artistNames")]
    pub artist_names: Vec<String>,
}

/// Catalog-wide counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub track_count: u64,
    pub artist_count: u64,
    pub album_count: u64,
    pub total_duration_ms: u64,
    pub explicit_count: u64,

    /// Integer mean of track popularity
    pub mean_popularity: u32,
}

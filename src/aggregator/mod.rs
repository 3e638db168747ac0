//! Aggregation of track records into chart data.
//!
//! This module transforms a parsed catalog into:
//! - Artist ranking (top artists chart)
//! - Genre ranking with long-tail collapsing (genre chart)
//! - Album rollups ranked by popularity (albums gallery)
//! - Catalog statistics and genre shares
//! - Searchable, sortable track listings

pub mod albums;
pub mod listing;
pub mod metrics;
pub mod ranking;

// Re-export main types and functions
pub use albums::summarize_albums;
pub use listing::{filter_tracks, sort_tracks, SortOrder, TrackSortKey};
pub use metrics::{calculate_catalog_stats, calculate_genre_shares};
pub use ranking::{collapse_long_tail, rank_artists, rank_genres};

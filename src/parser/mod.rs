//! Catalog parsing and schema definitions.
//!
//! This module handles:
//! - Track, artist and album records from `data.json`
//! - Loading and validating catalog documents
//! - Defining the report output schema

pub mod catalog;
pub mod schema;
pub mod track;

// Re-export main types
pub use catalog::{load_catalog, parse_catalog, validate_catalog_format};
pub use schema::{AlbumSummary, CatalogStats, GenreShare, RankedCount, Report};
pub use track::{Album, Artist, ExternalUrls, Followers, Image, Track};

//! Configuration and constants for the engine and the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default catalog document read by the `report` command
pub const DEFAULT_CATALOG_PATH: &str = "data.json";

/// Default report path written by the `report` command
pub const DEFAULT_REPORT_PATH: &str = "report.json";

// Ranking limits. These are part of the chart contract and are not adjustable.
pub const TOP_ARTISTS_LIMIT: usize = 10;
pub const TOP_ALBUMS_LIMIT: usize = 12;

// Genre long-tail collapsing: more than GENRE_COLLAPSE_THRESHOLD distinct genres
// keeps the top TOP_GENRES_KEPT and folds the rest into OTHER_GENRES_LABEL
pub const GENRE_COLLAPSE_THRESHOLD: usize = 7;
pub const TOP_GENRES_KEPT: usize = 6;
pub const OTHER_GENRES_LABEL: &str = "Autres";

// Wrapper fields that may hold the track array when the document is an object
pub const TRACK_ARRAY_FIELD_NAMES: &[&str] = &["tracks", "items", "data"];

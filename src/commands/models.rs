use std::path::PathBuf;
use crate::aggregator::{SortOrder, TrackSortKey};
use crate::utils::config::{DEFAULT_CATALOG_PATH, DEFAULT_REPORT_PATH};

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Catalog document to read
    pub input: PathBuf,

    /// Output path for JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_json: PathBuf::from(DEFAULT_REPORT_PATH),
            print_summary: false,
        }
    }
}

/// Arguments for the list command
#[derive(Debug, Clone)]
pub struct ListArgs {
    /// Catalog document to read
    pub input: PathBuf,

    /// Search text matched against track, artist and album names
    pub query: Option<String>,

    pub sort_by: TrackSortKey,

    pub order: SortOrder,

    /// Maximum rows to print (None = all)
    pub limit: Option<usize>,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CATALOG_PATH),
            query: None,
            sort_by: TrackSortKey::default(),
            order: SortOrder::default(),
            limit: None,
        }
    }
}

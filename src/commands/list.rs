//! List command implementation.
//!
//! Loads the catalog, filters it by a search query, sorts it and prints
//! one row per track.

use super::models::ListArgs;
use crate::aggregator::{filter_tracks, sort_tracks};
use crate::output::format_track_rows;
use crate::parser::load_catalog;
use anyhow::{Context, Result};
use log::info;

/// Execute the list command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The printed rows
pub fn execute_list(args: ListArgs) -> Result<Vec<String>> {
    let tracks = load_catalog(&args.input)
        .with_context(|| format!("Failed to load catalog {}", args.input.display()))?;

    let mut listing = filter_tracks(&tracks, args.query.as_deref().unwrap_or_default());
    sort_tracks(&mut listing, args.sort_by, args.order);

    if let Some(limit) = args.limit {
        listing.truncate(limit);
    }

    info!(
        "Listing {} of {} tracks sorted by {:?} ({:?})",
        listing.len(),
        tracks.len(),
        args.sort_by,
        args.order
    );

    let rows = format_track_rows(&listing);
    for row in &rows {
        println!("{}", row);
    }

    Ok(rows)
}

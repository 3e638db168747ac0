use anyhow::{Context, Result};
use std::path::PathBuf;
use crate::parser::load_catalog;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a catalog JSON file
pub fn validate_catalog_file(file_path: PathBuf) -> Result<()> {
    println!("Validating catalog: {}", file_path.display());

    let tracks = load_catalog(&file_path)
        .with_context(|| format!("Invalid catalog {}", file_path.display()))?;

    let with_album = tracks.iter().filter(|t| t.album.is_some()).count();
    let without_album_id = tracks
        .iter()
        .filter(|t| t.album.is_some() && t.album_id().is_none())
        .count();
    let without_artists = tracks.iter().filter(|t| t.artists.is_empty()).count();

    println!("✓ Valid catalog JSON");
    println!("  Tracks: {}", tracks.len());
    println!("  With album: {}", with_album);
    println!("  Album without id: {}", without_album_id);
    println!("  Without artists: {}", without_artists);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Track Charts Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Catalog document path");
        println!("  stats: object            - Catalog counters");
        println!("    track_count: number    - Tracks in the catalog");
        println!("    artist_count: number   - Distinct artist names");
        println!("    album_count: number    - Distinct album ids");
        println!("    total_duration_ms: number - Sum of track durations");
        println!("    explicit_count: number - Explicit tracks");
        println!("    mean_popularity: number - Mean track popularity");
        println!("  top_artists: array       - Top 10 artists by track count");
        println!("    label: string          - Artist name");
        println!("    count: number          - Tracks crediting the artist");
        println!("  genres: array            - Genre distribution (tail folded into 'Autres')");
        println!("    label: string          - Genre");
        println!("    count: number          - Occurrences");
        println!("    percentage: number     - Whole percentage of the displayed total");
        println!("  popular_albums: array    - Top 12 albums by popularity");
        println!("    id, name, images, release_date?, popularity");
        println!("    trackCount: number     - Catalog tracks on the album");
        println!("    artistNames: array     - Distinct artists, first-seen order");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Track Charts v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Artist, genre and album rankings from a static track catalog.");
}

//! Report command implementation.
//!
//! The report command:
//! 1. Loads the track catalog
//! 2. Calculates catalog statistics
//! 3. Ranks artists and genres
//! 4. Rolls up popular albums
//! 5. Writes the JSON report (and optionally prints a summary)

use super::models::ReportArgs;
use crate::aggregator::{
    calculate_catalog_stats, calculate_genre_shares, rank_artists, rank_genres, summarize_albums,
};
use crate::output::{generate_text_summary, write_report};
use crate::parser::{load_catalog, Report, Track};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Catalog read or parse failures
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading catalog...");
    let tracks = load_catalog(&args.input)
        .with_context(|| format!("Failed to load catalog {}", args.input.display()))?;

    info!("Step 2/3: Aggregating {} tracks...", tracks.len());
    let report = build_report(&tracks, &args.input.display().to_string());

    debug!("Top 3 artists:");
    for (i, artist) in report.top_artists.iter().take(3).enumerate() {
        debug!("  {}. {} ({} tracks)", i + 1, artist.label, artist.count);
    }

    info!("Step 3/3: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("CATALOG SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source: {}", report.source);
        println!("\n{}", generate_text_summary(&report));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Run every aggregation over a loaded catalog
///
/// **Public** - usable without touching the filesystem
pub fn build_report(tracks: &[Track], source: &str) -> Report {
    let stats = calculate_catalog_stats(tracks);
    info!("Catalog: {}", stats.summary());

    let top_artists = rank_artists(tracks);
    let genres = calculate_genre_shares(&rank_genres(tracks));
    let popular_albums = summarize_albums(tracks);

    Report {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        stats,
        top_artists,
        genres,
        popular_albums,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Catalog file not found: {}", args.input.display());
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_json.is_dir() {
        anyhow::bail!("Output path is a directory: {}", args.output_json.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn catalog_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","name":"One","artists":[{{"name":"X","genres":["rock"]}}],
                "album":{{"id":"A1","name":"Album","popularity":10}}}}]"#
        )
        .unwrap();
        file
    }

    #[test]
    fn test_validate_args_valid() {
        let input = catalog_file();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let args = ReportArgs {
            input: PathBuf::from("/definitely/not/here/data.json"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ReportArgs {
            input: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_output_is_directory() {
        let input = catalog_file();
        let out_dir = tempfile::tempdir().unwrap();
        let args = ReportArgs {
            input: input.path().to_path_buf(),
            output_json: out_dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_report_writes_output() {
        let input = catalog_file();
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("report.json");

        let report = execute_report(ReportArgs {
            input: input.path().to_path_buf(),
            output_json: output.clone(),
            print_summary: false,
        })
        .unwrap();

        assert!(output.exists());
        assert_eq!(report.stats.track_count, 1);
        assert_eq!(report.genres[0].label, "rock");
        assert_eq!(report.genres[0].percentage, 100);
        assert_eq!(report.popular_albums[0].artist_names, vec!["X"]);
    }
}

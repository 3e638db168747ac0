//! Plain-text chart summary for the terminal.

use crate::parser::schema::Report;
use crate::parser::Track;

const BAR_WIDTH: usize = 30;

/// Render a report as boxed text tables
///
/// **Public** - printed by `report --summary`
pub fn generate_text_summary(report: &Report) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  {} tracks | {} artists | {} albums | {} total",
        report.stats.track_count,
        report.stats.artist_count,
        report.stats.album_count,
        format_duration(report.stats.total_duration_ms)
    ));
    lines.push(String::new());

    lines.push("  TOP ARTISTS".to_string());
    lines.push(format!("  ┏{}┳{}┓", "━".repeat(34), "━".repeat(BAR_WIDTH + 9)));
    let max_count = report.top_artists.first().map(|a| a.count).unwrap_or(0);
    for artist in &report.top_artists {
        lines.push(format!(
            "  ┃ {:<32} ┃ {:<width$} {:>6} ┃",
            truncate_label(&artist.label, 32),
            bar(artist.count, max_count),
            artist.count,
            width = BAR_WIDTH
        ));
    }
    lines.push(format!("  ┗{}┻{}┛", "━".repeat(34), "━".repeat(BAR_WIDTH + 9)));
    lines.push(String::new());

    lines.push("  GENRES".to_string());
    for genre in &report.genres {
        lines.push(format!(
            "    {:<32} {:>6} ({:>3}%)",
            truncate_label(&genre.label, 32),
            genre.count,
            genre.percentage
        ));
    }
    lines.push(String::new());

    lines.push("  POPULAR ALBUMS".to_string());
    for (rank, album) in report.popular_albums.iter().enumerate() {
        lines.push(format!(
            "  {:>3}. {:<32} pop {:>3} | {} track(s) | {}{}",
            rank + 1,
            truncate_label(&album.name, 32),
            album.popularity,
            album.track_count,
            album.artist_names.join(", "),
            album
                .release_date
                .as_deref()
                .map(|date| format!(" | {date}"))
                .unwrap_or_default()
        ));
    }

    lines.join("\n")
}

/// Render one table row per track
///
/// **Public** - printed by the `list` command
pub fn format_track_rows(tracks: &[&Track]) -> Vec<String> {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let artists: Vec<&str> = track.artists.iter().map(|a| a.name.as_str()).collect();
            let album = track.album.as_ref().map(|a| a.name.as_str()).unwrap_or("-");

            format!(
                "  {:>4}. {:<32} {:<24} {:<24} {:>6} {:>4}{}",
                index + 1,
                truncate_label(&track.name, 32),
                truncate_label(&artists.join(", "), 24),
                truncate_label(album, 24),
                format_duration(track.duration_ms),
                track.popularity,
                if track.explicit { " E" } else { "" }
            )
        })
        .collect()
}

/// Format milliseconds as `m:ss`
///
/// **Public** - track and catalog durations
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

fn bar(count: u64, max_count: u64) -> String {
    if max_count == 0 {
        return String::new();
    }
    let filled = (count as f64 / max_count as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

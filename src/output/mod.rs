//! Output writers for chart reports.
//!
//! This module handles writing data in various formats:
//! - JSON reports
//! - Text summaries and track listings

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use text::{format_duration, format_track_rows, generate_text_summary};

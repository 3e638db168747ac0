//! Catalog loader for `data.json` documents.
//!
//! Turns a raw JSON document into a vector of [`Track`] records.
//! Records that fail to decode are logged and skipped.

use super::track::Track;
use crate::utils::config::TRACK_ARRAY_FIELD_NAMES;
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a catalog from a JSON file
///
/// **Public** - main entry point for reading `data.json`
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened
/// * `ParseError::JsonError` - file is not valid JSON
/// * `ParseError::InvalidFormat` - JSON does not hold a track array
pub fn load_catalog(input_path: impl AsRef<Path>) -> Result<Vec<Track>, ParseError> {
    let input_path = input_path.as_ref();

    info!("Loading catalog from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    let tracks = parse_catalog(&raw)?;

    info!("Loaded {} tracks", tracks.len());

    Ok(tracks)
}

/// Parse an already decoded JSON document into tracks
///
/// **Public** - used by `load_catalog` and by callers holding a JSON value
///
/// Accepts either a bare array of tracks or an object wrapping the array
/// under one of [`TRACK_ARRAY_FIELD_NAMES`].
pub fn parse_catalog(raw: &serde_json::Value) -> Result<Vec<Track>, ParseError> {
    let records = extract_track_array(raw)?;

    debug!("Catalog holds {} raw records", records.len());

    parse_tracks_array(records)
}

/// Check that a JSON document looks like a catalog
///
/// **Public** - cheap structural check without decoding each record
pub fn validate_catalog_format(raw: &serde_json::Value) -> bool {
    extract_track_array(raw).is_ok()
}

/// Locate the track array in the document
///
/// **Private** - internal helper for parse_catalog
fn extract_track_array(raw: &serde_json::Value) -> Result<&[serde_json::Value], ParseError> {
    match raw {
        serde_json::Value::Array(records) => Ok(records.as_slice()),

        serde_json::Value::Object(obj) => TRACK_ARRAY_FIELD_NAMES
            .iter()
            .find_map(|field| obj.get(*field).and_then(|value| value.as_array()))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "Object has no track array (expected one of: {})",
                    TRACK_ARRAY_FIELD_NAMES.join(", ")
                ))
            }),

        _ => Err(ParseError::InvalidFormat(
            "Catalog must be a JSON array or object".to_string(),
        )),
    }
}

/// Decode each record, skipping malformed ones
///
/// **Private** - internal parsing logic
fn parse_tracks_array(records: &[serde_json::Value]) -> Result<Vec<Track>, ParseError> {
    let mut tracks = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match Track::deserialize(record) {
            Ok(track) => tracks.push(track),
            Err(e) => {
                // Log but don't fail - some records may be malformed
                warn!("Failed to parse track {}: {}", index, e);
            }
        }
    }

    if tracks.is_empty() && !records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All track records failed to parse".to_string(),
        ));
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let raw = json!([
            { "id": "1", "name": "One", "artists": [{ "name": "A" }] },
            { "id": "2", "name": "Two", "artists": [{ "name": "B" }] }
        ]);

        let tracks = parse_catalog(&raw).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].artists[0].name, "B");
    }

    #[test]
    fn test_parse_wrapped_array() {
        let raw = json!({ "tracks": [{ "id": "1", "name": "One" }] });
        assert_eq!(parse_catalog(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_skips_malformed_records() {
        let raw = json!([
            { "id": "1", "name": "One" },
            { "name": 42 },
            "not a track"
        ]);

        let tracks = parse_catalog(&raw).unwrap();
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn test_all_records_malformed() {
        let raw = json!([{ "name": 1 }, { "id": false }]);
        assert!(matches!(
            parse_catalog(&raw),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_catalog(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(!validate_catalog_format(&json!("data")));
        assert!(!validate_catalog_format(&json!({ "songs": [] })));
        assert!(validate_catalog_format(&json!({ "items": [] })));
    }
}

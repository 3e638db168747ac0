//! Track catalog records as they appear in `data.json`.
//!
//! Every field the charts do not strictly need is optional or defaulted,
//! so partially filled records still decode.

use serde::{Deserialize, Deserializer, Serialize};

/// One playable song record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Performing artists, in credit order
    #[serde(default)]
    pub artists: Vec<Artist>,

    #[serde(default)]
    pub album: Option<Album>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub track_number: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub explicit: bool,

    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

/// Artist credited on a track.
///
/// `name` is the grouping key for every aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,

    #[serde(default)]
    pub genres: Option<Vec<String>>,

    #[serde(default)]
    pub images: Option<Vec<Image>>,

    #[serde(default)]
    pub popularity: Option<u32>,

    #[serde(default)]
    pub followers: Option<Followers>,
}

/// Album a track belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Grouping key for album rollups; albums without one are not rolled up
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub genres: Option<Vec<String>>,

    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub popularity: Option<u32>,

    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

impl Track {
    /// Album genres when the album lists at least one
    pub fn album_genres(&self) -> Option<&[String]> {
        self.album
            .as_ref()
            .and_then(|album| album.genres.as_deref())
            .filter(|genres| !genres.is_empty())
    }

    /// Album id, if the track has an album that carries one
    pub fn album_id(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|album| album.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Decode `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Artist {
    pub fn genres(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }
}

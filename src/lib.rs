//! Track Charts
//!
//! Artist, genre and album rankings derived from a static
//! catalog of music tracks (`data.json`).
//!
//! This crate provides the aggregation engine and the core
//! implementation for the `track-charts` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use track_charts::aggregator::{rank_artists, rank_genres, summarize_albums};
//! use track_charts::parser::load_catalog;
//!
//! let tracks = load_catalog("data.json")?;
//! let artists = rank_artists(&tracks);
//! let genres = rank_genres(&tracks);
//! let albums = summarize_albums(&tracks);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

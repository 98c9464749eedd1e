//! Rmigrate - Migrate a Beatport playlist export into a Spotify playlist
//!
//! This library provides functionality to parse a saved Beatport playlist
//! page and rebuild it as a Spotify playlist, matching each scraped track
//! to the catalog by best-effort text search.

/// Parsing of saved Beatport playlist pages
pub mod beatport;
/// Client modules for interacting with the Spotify catalog
pub mod clients;
/// Logger construction with stdout and per-run file sinks
pub mod logging;
/// Search-query construction and single-shot track matching
pub mod matcher;
/// Plain-text reporting of unmatched tracks
pub mod report;

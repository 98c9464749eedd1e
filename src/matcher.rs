//! Search-query construction and single-shot track matching.
//!
//! The query shape decides match outcomes, so the construction rules are
//! fixed: join title, raw artist names and the `Extended` marker, trim,
//! strip every `feat.` substring, collapse repeated spaces. First search
//! hit wins; there is no fuzzy retry and no scoring.

use log::info;

use crate::clients::{
    SpotifyClient,
    entities::{BeatportTrack, SpotifyTrack},
    errors::Result,
};

const EXTENDED_MIX: &str = "Extended Mix";

/// Build the search query for a scraped track.
///
/// The remix qualifier contributes the single word `Extended` when it is
/// exactly `"Extended Mix"`; every other qualifier adds nothing.
pub fn build_search_query(track: &BeatportTrack) -> String {
    let extended = if track.remixed == EXTENDED_MIX { "Extended" } else { "" };
    let joined = format!("{} {} {}", track.title, track.artists.join(" "), extended);
    collapse_spaces(&joined.trim().replace("feat.", ""))
}

/// Issue exactly one search for the track and take the first hit, or `None`
/// when the catalog has no result for the query.
pub async fn match_track(
    client: &SpotifyClient,
    track: &BeatportTrack,
) -> Result<Option<SpotifyTrack>> {
    // The wire query is quoted; the report uses the bare form
    let query = format!("'{}'", build_search_query(track));
    let mut found = client.search_track(&query, 1).await?;
    if found.is_empty() {
        info!("Track Not Found : {track:?}");
        return Ok(None);
    }
    Ok(Some(found.remove(0)))
}

// Collapse runs of two or more spaces into one
fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

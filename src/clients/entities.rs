/// Normalize raw artist names for comparison: trim and lower-case each one,
/// keeping the original order.
pub fn clear_artist_names(artists: &[String]) -> Vec<String> {
    artists.iter().map(|a| a.trim().to_lowercase()).collect()
}

/// A track scraped from a saved Beatport playlist page
#[derive(Debug)]
pub struct BeatportTrack {
    pub title: String,
    /// Remix qualifier as printed on the page, e.g. "Extended Mix"; may be empty
    pub remixed: String,
    pub artists: Vec<String>,
    pub artists_clear: Vec<String>,
}

impl BeatportTrack {
    pub fn new(title: String, remixed: String, artists: Vec<String>) -> Self {
        let artists_clear = clear_artist_names(&artists);
        BeatportTrack {
            title,
            remixed,
            artists,
            artists_clear,
        }
    }
}

/// A track returned by the Spotify search API
#[derive(Debug)]
pub struct SpotifyTrack {
    pub id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub artists_clear: Vec<String>,
    pub url: String,
}

/// Handle for the playlist created on Spotify at the start of a run
#[derive(Debug)]
pub struct Playlist {
    pub id: String,
    pub title: String,
}

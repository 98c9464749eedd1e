use std::env;
use std::path::PathBuf;

use log::{info, warn};
use rmigrate::beatport;
use rmigrate::clients::{
    SpotifyClient,
    entities::{BeatportTrack, SpotifyTrack},
    errors::{Error, Result},
};
use rmigrate::{matcher, report};

const FALLBACK_PLAYLIST_TITLE: &str = "New Playlist Auto";

// Configuration for the Migrator struct
pub struct Config {
    pub spotify: SpotifyClient,
    pub html_path: PathBuf,
    pub report_path: PathBuf,
}

pub struct ConfigBuilder {
    spotify: Option<SpotifyClient>,
    html_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            spotify: None,
            html_path: None, // Defaults to the HEAP_FILE_PATH environment variable
            report_path: None,
        }
    }

    pub fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        let html_path = match self.html_path {
            Some(p) => p,
            None => PathBuf::from(env::var("HEAP_FILE_PATH").map_err(|_| {
                Error::ConfigurationError(
                    "HEAP_FILE_PATH must point to the saved Beatport playlist page".into(),
                )
            })?),
        };
        Ok(Config {
            spotify,
            html_path,
            report_path: self
                .report_path
                .unwrap_or_else(|| PathBuf::from("reports/report.txt")),
        })
    }
}

// The main Migrator struct that performs the playlist migration
pub struct Migrator {
    config: Config,
}

impl Migrator {
    pub fn new(config: Config) -> Self {
        Migrator { config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting migration ...");
        let user_id = self.config.spotify.current_user_id().await?;

        let html = tokio::fs::read_to_string(&self.config.html_path).await?;
        let title = beatport::playlist_title(&html)
            .unwrap_or_else(|| FALLBACK_PLAYLIST_TITLE.to_string());
        let playlist = self.config.spotify.create_playlist(&user_id, &title).await?;
        info!("Create playlist : {playlist:?}");

        let tracks = beatport::collect_tracks(&html)?;
        info!("Collect {} tracks from Beatport", tracks.len());

        // Match each track in input order. A failed search call is routed to
        // the unmatched partition rather than aborting the run.
        let mut results = Vec::with_capacity(tracks.len());
        for track in tracks {
            match matcher::match_track(&self.config.spotify, &track).await {
                Ok(found) => results.push((track, found)),
                Err(e) => {
                    warn!("Search failed for {track:?}: {e}");
                    results.push((track, None));
                }
            }
        }
        let (matched, unmatched) = split_matches(results);
        info!("Found on Spotify : {}", matched.len());
        info!("Not Found on Spotify : {}", unmatched.len());

        if !matched.is_empty() {
            let track_ids: Vec<String> = matched.iter().map(|t| t.id.clone()).collect();
            self.config.spotify.add_tracks(&playlist, &track_ids).await?;
        }

        report::save_report(&unmatched, &self.config.report_path).await?;
        Ok(())
    }
}

// Partition the match results, preserving input order within each side
fn split_matches(
    results: Vec<(BeatportTrack, Option<SpotifyTrack>)>,
) -> (Vec<SpotifyTrack>, Vec<BeatportTrack>) {
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for (track, found) in results {
        match found {
            Some(spotify_track) => matched.push(spotify_track),
            None => unmatched.push(track),
        }
    }
    (matched, unmatched)
}

use std::path::PathBuf;

use log::debug;

use crate::clients::{
    entities::{Playlist, SpotifyTrack, clear_artist_names},
    errors::{Error, Result},
};
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{FullTrack, PlayableId, PlaylistId, SearchResult, SearchType, TrackId, UserId},
    prelude::*,
    scopes,
};

impl TryFrom<FullTrack> for SpotifyTrack {
    type Error = Error;

    fn try_from(f: FullTrack) -> Result<SpotifyTrack> {
        let id = f
            .id
            .ok_or_else(|| Error::ParseError(format!("search hit without a track id: {}", f.name)))?;
        let artists: Vec<String> = f.artists.into_iter().map(|a| a.name).collect();
        let artists_clear = clear_artist_names(&artists);
        let url = f.external_urls.get("spotify").cloned().unwrap_or_default();
        Ok(SpotifyTrack {
            id: id.id().to_string(),
            title: f.name,
            artists,
            artists_clear,
            url,
        })
    }
}

pub struct SpotifyClient {
    pub spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        SpotifyClient { spotify }
    }

    // Authorize the Spotify client via CLI prompt and OAuth flow
    // This function requires the `cli` feature enabled.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(false)?;
        // This function requires the `cli` feature enabled.
        self.spotify.prompt_for_token(&url).await?;
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify credentials: set RSPOTIFY_CLIENT_ID and RSPOTIFY_CLIENT_SECRET."
                    .into(),
            )
        })?;
        let oauth = OAuth::from_env(scopes!("playlist-modify-public")).ok_or_else(|| {
            Error::ConfigurationError(
                "Missing Spotify OAuth configuration: set RSPOTIFY_REDIRECT_URI.".into(),
            )
        })?;

        // Set up token caching in a default cache directory
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".rmigrate_token_cache");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }

    // Resolve the id of the authorized user
    pub async fn current_user_id(&self) -> Result<String> {
        let user = self.spotify.me().await?;
        Ok(user.id.id().to_string())
    }

    // Create a new public playlist owned by the given user
    pub async fn create_playlist(&self, user_id: &str, title: &str) -> Result<Playlist> {
        let user_id = UserId::from_id(user_id)?;
        let playlist = self
            .spotify
            .user_playlist_create(user_id, title, Some(true), Some(false), None)
            .await?;
        Ok(Playlist {
            id: playlist.id.id().to_string(),
            title: title.to_string(),
        })
    }

    // Single-shot track search; returns the raw hit list, possibly empty
    pub async fn search_track(&self, query: &str, limit: u32) -> Result<Vec<SpotifyTrack>> {
        let result = self
            .spotify
            .search(query, SearchType::Track, None, None, Some(limit), None)
            .await?;
        match result {
            SearchResult::Tracks(page) => {
                page.items.into_iter().map(SpotifyTrack::try_from).collect()
            }
            _ => Err(Error::ParseError(
                "track search returned a non-track result set".into(),
            )),
        }
    }

    // Append the given track ids to the playlist in one batched call
    pub async fn add_tracks(&self, playlist: &Playlist, track_ids: &[String]) -> Result<()> {
        let playlist_id = PlaylistId::from_id(playlist.id.as_str())?;
        let mut items = Vec::with_capacity(track_ids.len());
        for id in track_ids {
            items.push(PlayableId::Track(TrackId::from_id(id.as_str())?));
        }
        self.spotify
            .playlist_add_items(playlist_id, items, None)
            .await?;
        Ok(())
    }
}

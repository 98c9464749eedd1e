use rspotify::ClientError;
use rspotify::model::IdError;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while migrating a playlist
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse catalog response, error: {0}")]
    ParseError(String),

    #[error("Failed to extract track data from the export: {0}")]
    ExtractionError(String),

    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    #[error("Spotify id error: {0}")]
    SpotifyIdError(#[from] IdError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

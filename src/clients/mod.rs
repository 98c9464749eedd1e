/// Data entities for scraped and catalog tracks
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use spotify::SpotifyClient;

//! Lyrics service - orchestrates the lyric lookup
//!
//! 1. Exchange client credentials for a bearer token
//! 2. Search for the track (first result only)
//! 3. Fetch lyrics for the track ID from the lyrics service
//!
//! Every stage logs its own failure. The caller only sees a [`LyricsOutcome`].

use crate::lyrics::{
    domain::{LyricsError, LyricsOutcome, SongQuery},
    lyrics_api::{DEFAULT_LYRICS_URL, LyricsApiClient},
    spotify::{ClientCredentials, DEFAULT_SEARCH_URL, DEFAULT_TOKEN_URL, SpotifyClient},
    traits::{LyricsApi, TokenApi, TrackSearchApi},
};

/// Configuration for the lyrics service
#[derive(Clone)]
pub struct LyricsConfig {
    /// Spotify client credentials (None disables the lookup)
    pub credentials: Option<ClientCredentials>,
    pub token_url: String,
    pub search_url: String,
    pub lyrics_url: String,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            lyrics_url: DEFAULT_LYRICS_URL.to_string(),
        }
    }
}

/// Service for looking up lyrics by title and artist
pub struct LyricsService<T = SpotifyClient, S = SpotifyClient, L = LyricsApiClient> {
    token_api: T,
    search_api: S,
    lyrics_api: L,
}

impl LyricsService {
    /// Create a service backed by the real HTTP clients
    pub fn new(config: LyricsConfig) -> Result<Self, LyricsError> {
        let spotify =
            SpotifyClient::with_urls(config.credentials, config.token_url, config.search_url)?;
        let lyrics = LyricsApiClient::with_base_url(config.lyrics_url)?;
        Ok(Self::with_clients(spotify.clone(), spotify, lyrics))
    }
}

impl<T, S, L> LyricsService<T, S, L>
where
    T: TokenApi,
    S: TrackSearchApi,
    L: LyricsApi,
{
    /// Create a service from arbitrary API implementations
    pub fn with_clients(token_api: T, search_api: S, lyrics_api: L) -> Self {
        Self {
            token_api,
            search_api,
            lyrics_api,
        }
    }

    /// Look up lyrics for a song. Never fails; failures are logged and
    /// reported as [`LyricsOutcome::Unavailable`].
    pub async fn fetch(&self, query: &SongQuery) -> LyricsOutcome {
        let token = match self.token_api.request_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("Error fetching access token: {}", e);
                return LyricsOutcome::Unavailable(e);
            }
        };
        tracing::debug!("Obtained access token (expires in {:?})", token.expires_in);

        let track = match self.search_api.search_track(&token, query).await {
            Ok(Some(track)) => track,
            Ok(None) => {
                tracing::info!(
                    "No track found for '{}' by {}",
                    query.title,
                    query.artist
                );
                return LyricsOutcome::NotFound;
            }
            Err(e) => {
                tracing::error!("Error fetching track ID: {}", e);
                return LyricsOutcome::Unavailable(e);
            }
        };
        tracing::info!("Resolved '{}' to track {}", query.title, track);

        match self.lyrics_api.fetch_lyrics(&track).await {
            Ok(Some(text)) => {
                tracing::info!("Fetched {} lines of lyrics", text.lines().count());
                LyricsOutcome::Found(text)
            }
            Ok(None) => {
                tracing::info!("No lyrics available for track {}", track);
                LyricsOutcome::NotFound
            }
            Err(e) => {
                tracing::error!("Error fetching lyrics: {}", e);
                LyricsOutcome::Unavailable(e)
            }
        }
    }
}

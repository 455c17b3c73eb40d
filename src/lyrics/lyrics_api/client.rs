//! Lyrics service HTTP client
//!
//! Talks to the self-hosted lyrics service that maps a Spotify track ID to
//! lyric text. The service is expected at `http://localhost:8000/` unless
//! configured otherwise.

use super::{adapter, dto};
use crate::lyrics::domain::{LyricsError, TrackId};

pub const DEFAULT_LYRICS_URL: &str = "http://localhost:8000/";

/// Lyrics service client
pub struct LyricsApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LyricsApiClient {
    /// Create a client for the service at `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LyricsError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| LyricsError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Fetch lyrics for a track. `Ok(None)` means the service has none.
    pub async fn fetch_lyrics(&self, track: &TrackId) -> Result<Option<String>, LyricsError> {
        let url = self.lookup_url(track);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LyricsError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LyricsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LyricsError::Network(format!(
                "HTTP {}: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .json::<dto::LyricsResponse>()
            .await
            .map_err(|e| LyricsError::Parse(e.to_string()))?;

        Ok(adapter::to_lyrics(body))
    }

    fn lookup_url(&self, track: &TrackId) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}trackid={}",
            self.base_url,
            separator,
            urlencoding::encode(track.as_str())
        )
    }
}

//! Internal domain models for lyric lookup.
//!
//! These types are OUR types - they don't change when the token, search or
//! lyrics APIs change. Every external response is converted into these types
//! by the adapters.

use std::fmt;
use std::time::Duration;

/// The song the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongQuery {
    pub title: String,
    pub artist: String,
}

impl SongQuery {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Field-qualified search expression understood by the search endpoint.
    pub fn search_expression(&self) -> String {
        format!("track:{} artist:{}", self.title, self.artist)
    }
}

/// Short-lived credential returned by the token endpoint.
#[derive(Clone)]
pub struct BearerToken {
    value: String,
    /// Lifetime reported by the auth service, if any
    pub expires_in: Option<Duration>,
}

impl BearerToken {
    pub fn new(value: impl Into<String>, expires_in: Option<Duration>) -> Self {
        Self {
            value: value.into(),
            expires_in,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Never print the token itself
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Opaque track identifier from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackId(pub String);

impl TrackId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a full lyric lookup.
#[derive(Debug, Clone)]
pub enum LyricsOutcome {
    /// Lyric text was found
    Found(String),
    /// Every service answered, but there is no track or no lyrics for it
    NotFound,
    /// A stage failed before an answer could be obtained
    Unavailable(LyricsError),
}

impl LyricsOutcome {
    /// Lyric text, if any was found.
    pub fn lyrics(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            _ => None,
        }
    }
}

/// Errors that can occur while fetching lyrics
#[derive(Debug, Clone, thiserror::Error)]
pub enum LyricsError {
    #[error("Missing API credentials (set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET)")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

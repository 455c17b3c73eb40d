//! Trait definitions for the external lyric-lookup APIs.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real clients, while tests substitute the
//! mock implementations in [`mocks`].

use async_trait::async_trait;

use super::domain::{BearerToken, LyricsError, SongQuery, TrackId};

/// Credential exchange: obtain a bearer token.
#[async_trait]
pub trait TokenApi: Send + Sync {
    async fn request_token(&self) -> Result<BearerToken, LyricsError>;
}

/// Track resolution: (title, artist) → first matching track ID.
#[async_trait]
pub trait TrackSearchApi: Send + Sync {
    async fn search_track(
        &self,
        token: &BearerToken,
        query: &SongQuery,
    ) -> Result<Option<TrackId>, LyricsError>;
}

/// Lyric lookup by track ID.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    async fn fetch_lyrics(&self, track: &TrackId) -> Result<Option<String>, LyricsError>;
}

// Implement traits for real clients

#[async_trait]
impl TokenApi for super::spotify::SpotifyClient {
    async fn request_token(&self) -> Result<BearerToken, LyricsError> {
        self.request_token().await
    }
}

#[async_trait]
impl TrackSearchApi for super::spotify::SpotifyClient {
    async fn search_track(
        &self,
        token: &BearerToken,
        query: &SongQuery,
    ) -> Result<Option<TrackId>, LyricsError> {
        self.search_track(token, query).await
    }
}

#[async_trait]
impl LyricsApi for super::lyrics_api::LyricsApiClient {
    async fn fetch_lyrics(&self, track: &TrackId) -> Result<Option<String>, LyricsError> {
        self.fetch_lyrics(track).await
    }
}

/// Mock clients that return predefined results and count their calls.
#[cfg(test)]
pub mod mocks {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock token endpoint.
    pub struct MockToken {
        pub error: Option<LyricsError>,
        pub calls: AtomicUsize,
    }

    impl MockToken {
        pub fn ok() -> Self {
            Self {
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_error(error: LyricsError) -> Self {
            Self {
                error: Some(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TokenApi for MockToken {
        async fn request_token(&self) -> Result<BearerToken, LyricsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(BearerToken::new("mock-token", None))
        }
    }

    /// Mock search endpoint.
    pub struct MockSearch {
        pub result: Option<TrackId>,
        pub error: Option<LyricsError>,
        pub calls: AtomicUsize,
    }

    impl MockSearch {
        pub fn found(id: &str) -> Self {
            Self {
                result: Some(TrackId(id.to_string())),
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn no_match() -> Self {
            Self {
                result: None,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_error(error: LyricsError) -> Self {
            Self {
                result: None,
                error: Some(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TrackSearchApi for MockSearch {
        async fn search_track(
            &self,
            _token: &BearerToken,
            _query: &SongQuery,
        ) -> Result<Option<TrackId>, LyricsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.result.clone())
        }
    }

    /// Mock lyrics service.
    pub struct MockLyrics {
        pub lyrics: Option<String>,
        pub error: Option<LyricsError>,
        pub calls: AtomicUsize,
    }

    impl MockLyrics {
        pub fn with_lyrics(text: &str) -> Self {
            Self {
                lyrics: Some(text.to_string()),
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn empty() -> Self {
            Self {
                lyrics: None,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_error(error: LyricsError) -> Self {
            Self {
                lyrics: None,
                error: Some(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LyricsApi for MockLyrics {
        async fn fetch_lyrics(&self, _track: &TrackId) -> Result<Option<String>, LyricsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            Ok(self.lyrics.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_token_counts_calls() {
            let mock = MockToken::ok();
            mock.request_token().await.unwrap();
            mock.request_token().await.unwrap();
            assert_eq!(mock.calls.load(Ordering::SeqCst), 2);
        }

        #[tokio::test]
        async fn test_mock_search_error() {
            let mock = MockSearch::with_error(LyricsError::Network("timeout".to_string()));
            let token = BearerToken::new("t", None);
            let result = mock
                .search_track(&token, &SongQuery::new("a", "b"))
                .await;
            assert!(matches!(result, Err(LyricsError::Network(_))));
        }
    }
}

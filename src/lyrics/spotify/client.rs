//! Spotify Web API HTTP client
//!
//! Handles the client-credentials token exchange and the track search.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! ## Notes
//!
//! - The token endpoint wants HTTP Basic auth with `client_id:client_secret`
//!   and a form-encoded `grant_type=client_credentials` body.
//! - Search takes a field-qualified `q` (`track:... artist:...`). We let reqwest
//!   encode it; the API accepts both `%20` and `+` for spaces.
//! - Tokens are never refreshed: one run needs one token.

use super::{adapter, dto};
use crate::lyrics::domain::{BearerToken, LyricsError, SongQuery, TrackId};

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Client id/secret pair for the client-credentials flow
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Build credentials only when both halves are present and non-blank
    pub fn from_parts(client_id: Option<&str>, client_secret: Option<&str>) -> Option<Self> {
        let id = client_id.map(str::trim).filter(|s| !s.is_empty())?;
        let secret = client_secret.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            client_id: id.to_string(),
            client_secret: secret.to_string(),
        })
    }
}

/// Spotify API client
#[derive(Clone)]
pub struct SpotifyClient {
    credentials: Option<ClientCredentials>,
    http_client: reqwest::Client,
    token_url: String,
    search_url: String,
}

impl SpotifyClient {
    /// Create a client for the given token and search endpoints
    pub fn with_urls(
        credentials: Option<ClientCredentials>,
        token_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Result<Self, LyricsError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| LyricsError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            http_client,
            token_url: token_url.into(),
            search_url: search_url.into(),
        })
    }

    /// Exchange the client credentials for a bearer token
    pub async fn request_token(&self) -> Result<BearerToken, LyricsError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(LyricsError::MissingCredentials)?;

        let response = self
            .http_client
            .post(&self.token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| LyricsError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LyricsError::RateLimited);
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::AuthError>().await {
                return Err(LyricsError::Auth(
                    error.error_description.unwrap_or(error.error),
                ));
            }
            return Err(LyricsError::Auth(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| LyricsError::Parse(e.to_string()))?;

        adapter::to_token(body)
    }

    /// Search for the best-matching track; only the first result is requested
    pub async fn search_track(
        &self,
        token: &BearerToken,
        query: &SongQuery,
    ) -> Result<Option<TrackId>, LyricsError> {
        let expression = query.search_expression();

        let response = self
            .http_client
            .get(&self.search_url)
            .bearer_auth(token.as_str())
            .query(&[
                ("q", expression.as_str()),
                ("type", "track"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| LyricsError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LyricsError::RateLimited);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LyricsError::Auth("search rejected the bearer token".to_string()));
        }

        if !status.is_success() {
            if let Ok(error) = response.json::<dto::ApiErrorResponse>().await {
                return Err(LyricsError::Network(format!(
                    "HTTP {}: {}",
                    error.error.status, error.error.message
                )));
            }
            return Err(LyricsError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| LyricsError::Parse(e.to_string()))?;

        Ok(adapter::first_track_id(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve;

    fn credentials() -> Option<ClientCredentials> {
        ClientCredentials::from_parts(Some("id"), Some("sec"))
    }

    fn client_for(base_url: &str) -> SpotifyClient {
        SpotifyClient::with_urls(
            credentials(),
            format!("{}/token", base_url),
            format!("{}/search", base_url),
        )
        .unwrap()
    }

    fn query() -> SongQuery {
        SongQuery::new("Test Song", "Test Artist")
    }

    fn token() -> BearerToken {
        BearerToken::new("tok", None)
    }

    #[test]
    fn test_client_with_default_urls() {
        let client =
            SpotifyClient::with_urls(None, DEFAULT_TOKEN_URL, DEFAULT_SEARCH_URL).unwrap();
        assert_eq!(client.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(client.search_url, DEFAULT_SEARCH_URL);
        assert!(client.credentials.is_none());
    }

    #[test]
    fn test_credentials_require_both_parts() {
        assert!(ClientCredentials::from_parts(Some("id"), Some("secret")).is_some());
        assert!(ClientCredentials::from_parts(Some("id"), None).is_none());
        assert!(ClientCredentials::from_parts(None, Some("secret")).is_none());
        assert!(ClientCredentials::from_parts(Some("  "), Some("secret")).is_none());
    }

    #[tokio::test]
    async fn test_missing_credentials_sends_nothing() {
        // Unroutable URL: reaching the network would fail with Network, not MissingCredentials
        let client =
            SpotifyClient::with_urls(None, "http://127.0.0.1:9/token", "http://127.0.0.1:9/search")
                .unwrap();
        let result = client.request_token().await;
        assert!(matches!(result, Err(LyricsError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_request_token() {
        let server = serve(vec![(
            "200 OK",
            r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#,
        )]);
        let client = client_for(&server.url(""));

        let token = client.request_token().await.unwrap();
        assert_eq!(token.as_str(), "tok");
        assert_eq!(token.expires_in, Some(std::time::Duration::from_secs(3600)));

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /token "));
        // base64("id:sec")
        assert!(request.contains("aWQ6c2Vj"));
        assert!(request.to_lowercase().contains("authorization: basic"));
        assert!(request.ends_with("grant_type=client_credentials"));
    }

    #[tokio::test]
    async fn test_token_rejected_uses_error_description() {
        let server = serve(vec![(
            "400 Bad Request",
            r#"{"error":"invalid_client","error_description":"Invalid client secret"}"#,
        )]);
        let client = client_for(&server.url(""));

        let result = client.request_token().await;
        assert!(matches!(result, Err(LyricsError::Auth(ref msg)) if msg == "Invalid client secret"));
    }

    #[tokio::test]
    async fn test_token_rate_limited() {
        let server = serve(vec![("429 Too Many Requests", "{}")]);
        let client = client_for(&server.url(""));

        assert!(matches!(
            client.request_token().await,
            Err(LyricsError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn test_search_track() {
        let server = serve(vec![(
            "200 OK",
            r#"{"tracks":{"items":[{"id":"abc123","name":"Test Song","artists":[{"name":"Test Artist"}]}],"total":1}}"#,
        )]);
        let client = client_for(&server.url(""));

        let track = client.search_track(&token(), &query()).await.unwrap();
        assert_eq!(track, Some(TrackId("abc123".to_string())));

        let request = &server.requests()[0];
        assert!(request.starts_with("GET /search?"));
        assert!(request.contains("q=track%3ATest"));
        assert!(request.contains("type=track"));
        assert!(request.contains("limit=1"));
        assert!(request.to_lowercase().contains("authorization: bearer tok"));
    }

    #[tokio::test]
    async fn test_search_without_results() {
        let server = serve(vec![("200 OK", r#"{"tracks":{"items":[],"total":0}}"#)]);
        let client = client_for(&server.url(""));

        assert_eq!(client.search_track(&token(), &query()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_search_unauthorized() {
        let server = serve(vec![(
            "401 Unauthorized",
            r#"{"error":{"status":401,"message":"The access token expired"}}"#,
        )]);
        let client = client_for(&server.url(""));

        assert!(matches!(
            client.search_track(&token(), &query()).await,
            Err(LyricsError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let server = serve(vec![(
            "503 Service Unavailable",
            r#"{"error":{"status":503,"message":"Service unavailable"}}"#,
        )]);
        let client = client_for(&server.url(""));

        let result = client.search_track(&token(), &query()).await;
        assert!(matches!(result, Err(LyricsError::Network(ref msg)) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_search_rate_limited() {
        let server = serve(vec![("429 Too Many Requests", "{}")]);
        let client = client_for(&server.url(""));

        assert!(matches!(
            client.search_track(&token(), &query()).await,
            Err(LyricsError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let server = serve(vec![("200 OK", "not json")]);
        let client = client_for(&server.url(""));

        assert!(matches!(
            client.search_track(&token(), &query()).await,
            Err(LyricsError::Parse(_))
        ));
    }
}

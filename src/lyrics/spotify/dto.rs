//! Spotify Web API Data Transfer Objects
//!
//! These types match what the token and search endpoints return.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference:
//! - https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
//! - https://developer.spotify.com/documentation/web-api/reference/search

use serde::{Deserialize, Serialize};

/// Client-credentials token response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "Bearer" in practice
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
}

/// Error body returned by the accounts service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthError {
    pub error: String,
    pub error_description: Option<String>,
}

/// Search response (only the `tracks` page is requested)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

/// A page of track results
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
    pub total: Option<u64>,
}

/// A track object (fields we don't use are ignored)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
}

/// Error body returned by the Web API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

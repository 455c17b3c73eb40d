//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types become domain types.

use std::time::Duration;

use super::dto;
use crate::lyrics::domain::{BearerToken, LyricsError, TrackId};

/// Convert a token response into a bearer token
pub fn to_token(response: dto::TokenResponse) -> Result<BearerToken, LyricsError> {
    if response.access_token.trim().is_empty() {
        return Err(LyricsError::InvalidResponse(
            "token response has an empty access_token".to_string(),
        ));
    }

    if let Some(kind) = response.token_type.as_deref()
        && !kind.eq_ignore_ascii_case("bearer")
    {
        tracing::warn!("Unexpected token type {:?}, using it as a bearer token", kind);
    }

    Ok(BearerToken::new(
        response.access_token,
        response.expires_in.map(Duration::from_secs),
    ))
}

/// Take the first track of a search response, if any
pub fn first_track_id(response: dto::SearchResponse) -> Option<TrackId> {
    response
        .tracks
        .and_then(|page| page.items.into_iter().next())
        .map(|track| TrackId(track.id))
}

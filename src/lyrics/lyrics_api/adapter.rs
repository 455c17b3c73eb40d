//! Adapter layer: Convert lyrics service DTOs to lyric text

use super::dto;

/// Marker some providers use for instrumental breaks
const INSTRUMENTAL_MARKER: &str = "♪";

/// Extract lyric text from a response, or `None` when the service has none.
///
/// A flat `lyrics` string wins over synced `lines`.
pub fn to_lyrics(response: dto::LyricsResponse) -> Option<String> {
    if response.error {
        if let Some(message) = &response.message {
            tracing::debug!("Lyrics service reported: {}", message);
        }
        return None;
    }

    if let Some(text) = response.lyrics
        && !text.trim().is_empty()
    {
        return Some(text);
    }

    let joined = response
        .lines
        .iter()
        .map(|line| line.words.trim())
        .filter(|words| !words.is_empty() && *words != INSTRUMENTAL_MARKER)
        .collect::<Vec<_>>()
        .join("\n");

    (!joined.is_empty()).then_some(joined)
}

//! Lyrics service Data Transfer Objects
//!
//! The lyrics service is a self-hosted companion (by default on
//! `localhost:8000`) keyed by Spotify track ID. Deployments answer in one of
//! two shapes:
//!
//! Flat:
//! ```json
//! { "lyrics": "line one\nline two" }
//! ```
//!
//! Line-synced:
//! ```json
//! {
//!   "error": false,
//!   "syncType": "LINE_SYNCED",
//!   "lines": [{ "startTimeMs": "960", "words": "line one", "endTimeMs": "0" }]
//! }
//! ```
//!
//! Errors come back as `{ "error": true, "message": "lyrics for this track is not available on spotify!" }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LyricsResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    #[serde(rename = "syncType")]
    pub sync_type: Option<String>,
    pub lyrics: Option<String>,
    #[serde(default)]
    pub lines: Vec<LyricLine>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricLine {
    #[serde(rename = "startTimeMs")]
    pub start_time_ms: Option<String>,
    #[serde(default)]
    pub words: String,
}

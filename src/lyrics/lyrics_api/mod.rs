//! Lyrics service integration (track ID → lyric text)

mod adapter;
mod client;
pub mod dto;

pub use client::{DEFAULT_LYRICS_URL, LyricsApiClient};

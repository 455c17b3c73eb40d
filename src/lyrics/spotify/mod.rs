//! Spotify Web API integration
//!
//! Used for the client-credentials token exchange and for resolving a
//! (title, artist) pair to a track ID.

mod adapter;
mod client;
pub mod dto;

pub use client::{ClientCredentials, DEFAULT_SEARCH_URL, DEFAULT_TOKEN_URL, SpotifyClient};

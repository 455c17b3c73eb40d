//! Lyrics lookup - resolves a song to lyric text through external services.
//!
//! # Architecture
//!
//! Same layering for each external API:
//! - **Domain models** (`domain.rs`) - our types, independent of any API
//! - **DTOs** (`spotify/dto.rs`, `lyrics_api/dto.rs`) - exact response shapes
//! - **Adapters** - convert DTOs to domain values
//! - **Clients** - HTTP clients
//! - **Service** - runs token exchange → track search → lyric fetch
//!
//! # Usage
//!
//! ```ignore
//! use lyrics::{LyricsConfig, LyricsService, SongQuery};
//!
//! let service = LyricsService::new(LyricsConfig::default())?;
//! match service.fetch(&SongQuery::new("Yesterday", "The Beatles")).await {
//!     LyricsOutcome::Found(text) => println!("{text}"),
//!     other => println!("no lyrics: {other:?}"),
//! }
//! ```

pub mod domain;
pub mod lyrics_api;
pub mod service;
pub mod spotify;
pub mod traits;

pub use domain::{BearerToken, LyricsError, LyricsOutcome, SongQuery, TrackId};
pub use service::{LyricsConfig, LyricsService};
pub use spotify::ClientCredentials;
